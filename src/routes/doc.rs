use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{IdentityRequest, TokenResponse},
        classes::{ClassList, ProposeClassRequest, UpdateClassRequest, UpdateOutcome},
        payments::{
            CompletePaymentRequest, CreatePaymentIntentRequest, CreatePaymentIntentResponse,
            EnrollmentOutcome, PaymentList,
        },
        selections::{DeleteOutcome, SelectClassRequest, SelectionList},
        users::{AdminCheckResponse, CreateUserRequest, InstructorCheckResponse, UserList},
    },
    models::{DanceClass, Payment, Selection, User},
    response::{ApiResponse, Meta},
    routes::{auth, classes, health, payments, selections, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::issue_token,
        classes::propose_class,
        classes::approve_class,
        classes::list_classes,
        classes::my_added_classes,
        classes::get_class,
        classes::update_class,
        selections::select_class,
        selections::user_selected_classes,
        selections::delete_selected_class,
        users::create_user,
        users::list_users,
        users::list_instructors,
        users::make_admin,
        users::make_instructor,
        users::check_admin,
        users::check_instructor,
        payments::create_payment_intent,
        payments::get_selection_for_payment,
        payments::complete_payment,
        payments::payment_history,
    ),
    components(
        schemas(
            User,
            DanceClass,
            Selection,
            Payment,
            IdentityRequest,
            TokenResponse,
            ProposeClassRequest,
            UpdateClassRequest,
            UpdateOutcome,
            ClassList,
            SelectClassRequest,
            SelectionList,
            DeleteOutcome,
            CreateUserRequest,
            UserList,
            AdminCheckResponse,
            InstructorCheckResponse,
            CreatePaymentIntentRequest,
            CreatePaymentIntentResponse,
            CompletePaymentRequest,
            EnrollmentOutcome,
            PaymentList,
            Meta,
            ApiResponse<DanceClass>,
            ApiResponse<ClassList>,
            ApiResponse<Selection>,
            ApiResponse<SelectionList>,
            ApiResponse<UserList>,
            ApiResponse<EnrollmentOutcome>,
            ApiResponse<PaymentList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Token issuance"),
        (name = "Classes", description = "Class catalog"),
        (name = "Selections", description = "Student cart"),
        (name = "Users", description = "Users and role gate"),
        (name = "Payments", description = "Charge intents and enrollment completion"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
