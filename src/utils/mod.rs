pub mod debcontrol;
