//! Tipos de Erro do Subsistema CpuFreq
//!
//! Todas as falhas são retornos locais ao chamador imediato; nenhuma é
//! escalada para um caminho de falha global.

use crate::sys::Errno;
use core::fmt;

/// Erros do núcleo cpufreq
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuFreqError {
    /// Nenhuma entrada da tabela satisfaz (alvo, relação)
    InvalidTarget,
    /// Pedido chegou com a CPU suspensa (nunca enfileirado)
    DeviceSuspended,
    /// CPU alvo inexistente ou fora do escalonamento
    DeviceUnavailable,
    /// Falha transitória preparando o despacho entre CPUs
    ResourceExhausted,
    /// Primitivo de clock reportou erro (status repassado sem alteração)
    HardwareFailure(i32),
    /// Entrada malformada ou fora de faixa no plano de controle
    InvalidArgument,
}

impl CpuFreqError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTarget => "Frequência alvo inválida para a tabela",
            Self::DeviceSuspended => "CPU suspensa: troca de frequência recusada",
            Self::DeviceUnavailable => "CPU inexistente ou inativa",
            Self::ResourceExhausted => "Sem recursos para despachar o pedido",
            Self::HardwareFailure(_) => "Primitivo de clock falhou",
            Self::InvalidArgument => "Argumento inválido",
        }
    }

    /// Código POSIX equivalente.
    pub fn errno(&self) -> Errno {
        match self {
            Self::InvalidTarget | Self::InvalidArgument => Errno::EINVAL,
            Self::DeviceSuspended => Errno::EFAULT,
            Self::DeviceUnavailable => Errno::ENODEV,
            Self::ResourceExhausted => Errno::ENOMEM,
            Self::HardwareFailure(_) => Errno::EIO,
        }
    }

    /// Status negativo estilo kernel. Falhas de hardware devolvem o status
    /// original do primitivo de clock.
    pub fn as_status(&self) -> isize {
        match self {
            Self::HardwareFailure(status) if *status < 0 => *status as isize,
            _ => self.errno().as_isize(),
        }
    }
}

impl fmt::Display for CpuFreqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareFailure(status) => write!(f, "{} (status={})", self.as_str(), status),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Status de falha devolvido pelo primitivo de clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockError(pub i32);

impl From<ClockError> for CpuFreqError {
    fn from(err: ClockError) -> Self {
        Self::HardwareFailure(err.0)
    }
}
