//! Limites de Frequência por CPU
//!
//! Cada CPU guarda os limites físicos (descobertos da tabela) e os limites
//! permitidos (ajustados por fontes de política, ex: térmica).
//!
//! Invariante após a descoberta:
//! `hw_min <= allowed_min <= allowed_max <= hw_max`.
//! Antes da descoberta os limites não são confiáveis e `clamp` não altera
//! a frequência.
//!
//! Sem concorrência própria: protegido pela guarda da CPU dona.

use super::config::NO_LIMIT;
use super::{FreqTable, FrequencyKHz};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreLimits {
    hw_min: FrequencyKHz,
    hw_max: FrequencyKHz,
    allowed_min: FrequencyKHz,
    allowed_max: FrequencyKHz,
    initialized: bool,
}

impl CoreLimits {
    pub const fn new() -> Self {
        Self {
            hw_min: 0,
            hw_max: 0,
            allowed_min: 0,
            allowed_max: 0,
            initialized: false,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn hardware_min(&self) -> FrequencyKHz {
        self.hw_min
    }

    pub fn hardware_max(&self) -> FrequencyKHz {
        self.hw_max
    }

    pub fn allowed_min(&self) -> FrequencyKHz {
        self.allowed_min
    }

    pub fn allowed_max(&self) -> FrequencyKHz {
        self.allowed_max
    }

    /// `(hw_min, hw_max)` se já descobertos.
    pub fn hardware_bounds(&self) -> Option<(FrequencyKHz, FrequencyKHz)> {
        self.initialized.then_some((self.hw_min, self.hw_max))
    }

    /// Varre a tabela uma vez e fixa os limites físicos.
    ///
    /// Chamadas repetidas não alteram limites já descobertos. Retorna `false`
    /// se a tabela não tiver nenhuma entrada válida.
    pub fn discover(&mut self, table: FreqTable<'_>) -> bool {
        if self.initialized {
            return true;
        }

        let Some((min, max)) = table.bounds() else {
            return false;
        };

        self.hw_min = min;
        self.hw_max = max;
        self.allowed_min = min;
        self.allowed_max = max;
        self.initialized = true;
        true
    }

    /// Ajusta os limites permitidos.
    ///
    /// `NO_LIMIT` restaura o limite físico; valores fora de
    /// `[hw_min, hw_max]` também caem no limite físico, sem erro.
    /// Sem descoberta prévia, não faz nada.
    pub fn restrict(&mut self, min: FrequencyKHz, max: FrequencyKHz) {
        if !self.initialized {
            return;
        }

        self.allowed_min = if min != NO_LIMIT && self.in_hardware_range(min) {
            min
        } else {
            self.hw_min
        };

        self.allowed_max = if max != NO_LIMIT && self.in_hardware_range(max) {
            max
        } else {
            self.hw_max
        };

        // Par invertido: o teto vence.
        if self.allowed_min > self.allowed_max {
            self.allowed_min = self.allowed_max;
        }
    }

    /// Limita `rate` a `[allowed_min, allowed_max]`.
    pub fn clamp(&self, rate: FrequencyKHz) -> FrequencyKHz {
        if !self.initialized {
            return rate;
        }

        if rate > self.allowed_max {
            crate::ktrace!("(CpuFreq) max: limitando freq para ", self.allowed_max);
            self.allowed_max
        } else if rate < self.allowed_min {
            crate::ktrace!("(CpuFreq) min: limitando freq para ", self.allowed_min);
            self.allowed_min
        } else {
            rate
        }
    }

    /// Máximo físico, ou `fallback` antes da descoberta.
    pub(crate) fn hardware_max_or(&self, fallback: FrequencyKHz) -> FrequencyKHz {
        if self.initialized {
            self.hw_max
        } else {
            fallback
        }
    }

    #[inline]
    fn in_hardware_range(&self, freq: FrequencyKHz) -> bool {
        freq >= self.hw_min && freq <= self.hw_max
    }
}
