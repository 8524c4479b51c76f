pub mod physics_adapter;
pub mod rigid_body;
pub mod rigid_body_system;
