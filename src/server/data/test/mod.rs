mod cabin;
mod offering;
mod user;
