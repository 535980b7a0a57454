pub mod cabin_lock;
