#![no_std]

extern crate alloc;

pub mod audio;
pub mod graphics;
pub mod timer;
pub mod advanced;
