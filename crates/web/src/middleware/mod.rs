pub mod role_gate;
