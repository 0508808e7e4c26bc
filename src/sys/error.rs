//! # Standard Error Codes (Errno)
//!
//! Define os códigos de erro devolvidos pelo núcleo cpufreq ao framework de
//! governadores e ao plano de controle.
//! Baseado no padrão POSIX/Linux para que o chamador possa repassar o código
//! sem tradução.
//!
//! Valores negativos são usados em retornos de status (isize).

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    EIO = 5,     // I/O error
    ENOMEM = 12, // Out of memory
    EFAULT = 14, // Bad address
    ENODEV = 19, // No such device
    EINVAL = 22, // Invalid argument
}

impl Errno {
    pub fn as_usize(self) -> usize {
        self as usize
    }

    pub fn as_isize(self) -> isize {
        -(self as i32) as isize
    }
}
