//! Infrastructure Layer

pub mod remote;

pub use remote::RemoteHealthProbe;
