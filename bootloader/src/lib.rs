#![no_std]

extern crate alloc;

pub mod boot_heap;
pub mod config_parser;
pub mod kernel_loader;
pub mod memory_map;
pub mod multi_stage_boot;
pub mod boot;
