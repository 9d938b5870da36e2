pub mod resource_cleanup;
pub mod versioning;
pub mod dependencies;
pub mod driver_modules;
pub mod recovery;
pub mod debugging;
