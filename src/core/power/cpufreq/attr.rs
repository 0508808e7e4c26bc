//! Atributos de Texto do Plano de Controle
//!
//! | nome                            | modo | escopo  |
//! |---------------------------------|------|---------|
//! | `mfreq`                         | 0200 | global  |
//! | `screen_off_max_freq`           | 0644 | policy  |
//! | `scaling_available_frequencies` | 0444 | policy  |
//!
//! Escritas malformadas são recusadas com `InvalidArgument` e não alteram
//! o estado anterior.

use super::driver::CpuFreqCore;
use super::error::CpuFreqError;
use super::platform::Platform;
use super::{FrequencyKHz, Policy, Relation};
use crate::core::smp::CpuId;
use alloc::format;
use alloc::string::String;
use core::fmt::Write;

/// Onde o atributo é publicado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrScope {
    /// Um único arquivo para o driver inteiro.
    Global,
    /// Um arquivo por policy.
    Policy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFreqAttr {
    pub name: &'static str,
    /// Permissões estilo POSIX (ex: 0o644).
    pub mode: u16,
    pub scope: AttrScope,
}

impl CpuFreqAttr {
    pub const fn new(name: &'static str, mode: u16, scope: AttrScope) -> Self {
        Self { name, mode, scope }
    }

    pub fn is_readable(&self) -> bool {
        self.mode & 0o444 != 0
    }

    pub fn is_writable(&self) -> bool {
        self.mode & 0o222 != 0
    }
}

pub const ATTR_MFREQ: &str = "mfreq";
pub const ATTR_SCREEN_OFF_MAX_FREQ: &str = "screen_off_max_freq";
pub const ATTR_AVAILABLE_FREQS: &str = "scaling_available_frequencies";

/// Atributos exportados pelo driver.
pub static CPUFREQ_ATTRS: [CpuFreqAttr; 3] = [
    CpuFreqAttr::new(ATTR_MFREQ, 0o200, AttrScope::Global),
    CpuFreqAttr::new(ATTR_SCREEN_OFF_MAX_FREQ, 0o644, AttrScope::Policy),
    CpuFreqAttr::new(ATTR_AVAILABLE_FREQS, 0o444, AttrScope::Policy),
];

pub fn find_attr(name: &str) -> Option<&'static CpuFreqAttr> {
    CPUFREQ_ATTRS.iter().find(|a| a.name == name)
}

// =============================================================================
// PARSING
// =============================================================================

/// Inteiro sem sinal com base automática (`0x` hex, `0` octal, senão
/// decimal). Aceita um único `\n` final; qualquer outro lixo é erro.
fn parse_u64_auto(buf: &str) -> Option<u64> {
    let s = buf.strip_suffix('\n').unwrap_or(buf);
    if s.is_empty() {
        return None;
    }

    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Decimal sem sinal no início do buffer, ignorando espaços à esquerda.
/// O restante do buffer é ignorado.
fn parse_leading_u32(buf: &str) -> Option<u32> {
    let s = buf.trim_start();
    let end = s
        .char_indices()
        .find(|&(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

// =============================================================================
// SHOW / STORE
// =============================================================================

impl<P: Platform> CpuFreqCore<P> {
    pub fn attributes(&self) -> &'static [CpuFreqAttr] {
        &CPUFREQ_ATTRS
    }

    /// Leitura de um atributo pelo nome.
    pub fn show_attr(&self, name: &str, policy: &Policy) -> Result<String, CpuFreqError> {
        let attr = find_attr(name).ok_or(CpuFreqError::InvalidArgument)?;
        if !attr.is_readable() {
            return Err(CpuFreqError::InvalidArgument);
        }

        match attr.name {
            ATTR_SCREEN_OFF_MAX_FREQ => Ok(self.show_screen_off_freq()),
            ATTR_AVAILABLE_FREQS => self.show_available_freqs(policy.cpu),
            _ => Err(CpuFreqError::InvalidArgument),
        }
    }

    /// Escrita de um atributo pelo nome. Retorna os bytes consumidos.
    pub fn store_attr(&self, name: &str, policy: &Policy, buf: &str) -> Result<usize, CpuFreqError> {
        let attr = find_attr(name).ok_or(CpuFreqError::InvalidArgument)?;
        if !attr.is_writable() {
            return Err(CpuFreqError::InvalidArgument);
        }

        match attr.name {
            ATTR_MFREQ => self.store_mfreq(buf),
            ATTR_SCREEN_OFF_MAX_FREQ => self.store_screen_off_freq(policy, buf),
            _ => Err(CpuFreqError::InvalidArgument),
        }
    }

    /// `mfreq`: valor não-zero liga o modo manual.
    pub fn store_mfreq(&self, buf: &str) -> Result<usize, CpuFreqError> {
        let Some(val) = parse_u64_auto(buf) else {
            crate::kerror!("(CpuFreq) parâmetro inválido para mfreq");
            return Err(CpuFreqError::InvalidArgument);
        };

        self.set_manual_override(val != 0);
        Ok(buf.len())
    }

    pub fn show_screen_off_freq(&self) -> String {
        format!("{}\n", self.screen_off_max_freq())
    }

    /// Novo teto de tela apagada, casado "no máximo" na tabela da CPU.
    pub fn store_screen_off_freq(&self, policy: &Policy, buf: &str) -> Result<usize, CpuFreqError> {
        let shared = self.shared();
        let cpu = policy.cpu;

        let table = shared
            .platform
            .table(cpu)
            .ok_or(CpuFreqError::InvalidArgument)?;
        let freq = parse_leading_u32(buf).ok_or(CpuFreqError::InvalidArgument)?;
        let slot = shared.slot(cpu).map_err(|_| CpuFreqError::InvalidArgument)?;

        let _state = slot.guard.lock();
        let resolved: FrequencyKHz = shared
            .platform
            .table_target(policy, table, freq, Relation::High)
            .and_then(|index| table.frequency(index))
            .ok_or(CpuFreqError::InvalidArgument)?;

        shared.caps.set_screen_off_max_freq(resolved);
        crate::kinfo!("(CpuFreq) novo teto de tela apagada=", resolved);
        Ok(buf.len())
    }

    /// Entradas válidas da tabela separadas por espaço.
    pub fn show_available_freqs(&self, cpu: CpuId) -> Result<String, CpuFreqError> {
        let table = self
            .shared()
            .platform
            .table(cpu)
            .ok_or(CpuFreqError::InvalidArgument)?;

        let mut out = String::new();
        for (_, freq) in table.iter() {
            let _ = write!(out, "{} ", freq);
        }
        if out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
        Ok(out)
    }
}
