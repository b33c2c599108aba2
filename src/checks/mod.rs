pub mod docker;
pub mod http;
pub mod kube;
pub mod terraform;
pub mod webapp;
