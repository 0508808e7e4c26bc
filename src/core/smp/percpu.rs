//! Arquivo: core/smp/percpu.rs
//!
//! Propósito: Registro de dados Por-CPU (Per-CPU variables).
//! Cada núcleo possui seu próprio slot, indexado pelo id lógico da CPU,
//! evitando contenda entre núcleos que não compartilham estado.
//!
//! Detalhes de Implementação:
//! - O registro é alocado UMA vez no boot, quando a topologia já é conhecida,
//!   e nunca é redimensionado.
//! - Diferente de um `static` com `UnsafeCell`, cada slot é acessado por
//!   referência compartilhada; a mutabilidade fica a cargo do próprio `T`
//!   (ex: `spin::Mutex`).

//! Variáveis Per-CPU

use super::topology::CpuId;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// Número máximo de CPUs suportadas.
pub const MAX_CPUS: usize = 32;

/// Registro de dados replicados por CPU.
///
/// # Exemplo
///
/// ```ignore
/// let counters = PerCpu::new(4, |_| AtomicU64::new(0))?;
/// counters.get(2).unwrap().fetch_add(1, Ordering::Relaxed);
/// ```
pub struct PerCpu<T> {
    data: Box<[T]>,
}

impl<T> PerCpu<T> {
    /// Aloca um slot por CPU possível.
    ///
    /// Retorna `None` se `count` for zero ou exceder `MAX_CPUS`.
    pub fn new<F>(count: usize, mut init: F) -> Option<Self>
    where
        F: FnMut(CpuId) -> T,
    {
        if count == 0 || count > MAX_CPUS {
            return None;
        }

        let mut data = Vec::with_capacity(count);
        for cpu in 0..count {
            data.push(init(cpu as CpuId));
        }

        Some(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Acesso ao slot de uma CPU específica.
    #[inline]
    pub fn get(&self, cpu: CpuId) -> Option<&T> {
        self.data.get(cpu as usize)
    }

    /// Número de CPUs possíveis (fixo após o boot).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Itera em ordem crescente de id (ordem fixa e determinística).
    pub fn iter(&self) -> impl Iterator<Item = (CpuId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(cpu, slot)| (cpu as CpuId, slot))
    }
}
