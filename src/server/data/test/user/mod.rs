use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, Role, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod create;
mod get_by_roles;
