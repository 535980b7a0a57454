use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        booking::{AvailabilityDto, BookingDto, BookingRequestDto},
        cabin::{CabinDto, CabinRequestDto},
        offering::{ServiceDto, ServiceRequestDto},
        user::{ChangePasswordDto, LoginDto, RegisterDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{auth, booking, cabin, offering, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Cabin Booking API"),
    paths(
        booking::create_booking,
        booking::get_bookings,
        booking::check_availability,
        booking::get_booking,
        booking::update_booking,
        booking::delete_booking,
        cabin::get_cabins,
        cabin::get_available_cabins,
        cabin::get_cabin,
        cabin::create_cabin,
        cabin::update_cabin,
        cabin::delete_cabin,
        offering::get_services,
        offering::get_service,
        offering::create_service,
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        user::get_clients,
        user::get_employees,
        user::get_user,
        user::update_user,
        user::change_password,
        user::delete_user,
        user::get_user_bookings,
    ),
    components(schemas(
        ErrorDto,
        BookingDto,
        BookingRequestDto,
        AvailabilityDto,
        CabinDto,
        CabinRequestDto,
        ServiceDto,
        ServiceRequestDto,
        UserDto,
        RegisterDto,
        LoginDto,
        UpdateUserDto,
        ChangePasswordDto,
    )),
    tags(
        (name = booking::BOOKING_TAG, description = "Bookings and availability"),
        (name = cabin::CABIN_TAG, description = "Cabin catalog"),
        (name = offering::SERVICE_TAG, description = "Extra services"),
        (name = auth::AUTH_TAG, description = "Registration and sessions"),
        (name = user::USER_TAG, description = "User accounts"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // Static segments are registered next to `{id}`; axum prefers them on match
        .route(
            "/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route("/bookings/availability", get(booking::check_availability))
        .route(
            "/bookings/{id}",
            get(booking::get_booking)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route("/cabins", get(cabin::get_cabins).post(cabin::create_cabin))
        .route("/cabins/available", get(cabin::get_available_cabins))
        .route(
            "/cabins/{id}",
            get(cabin::get_cabin)
                .put(cabin::update_cabin)
                .delete(cabin::delete_cabin),
        )
        .route(
            "/services",
            get(offering::get_services).post(offering::create_service),
        )
        .route("/services/{id}", get(offering::get_service))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/user", get(auth::get_user))
        .route("/users/clients", get(user::get_clients))
        .route("/users/employees", get(user::get_employees))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/users/{id}/password", put(user::change_password))
        .route("/users/{id}/bookings", get(user::get_user_bookings))
}
