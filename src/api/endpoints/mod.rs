pub mod admin;
pub mod hashes;
pub mod sources;
pub mod verify;
