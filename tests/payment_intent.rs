use dance_academy_api::{error::AppError, services::payment_service::to_minor_units};

#[test]
fn price_converts_to_cents() {
    assert_eq!(to_minor_units(50.0).unwrap(), 5000);
    assert_eq!(to_minor_units(0.5).unwrap(), 50);
    assert_eq!(to_minor_units(19.99).unwrap(), 1999);
}

#[test]
fn fractional_cents_round() {
    assert_eq!(to_minor_units(12.3456).unwrap(), 1235);
    assert_eq!(to_minor_units(12.3449).unwrap(), 1234);
}

#[test]
fn non_positive_price_is_rejected() {
    assert!(matches!(to_minor_units(0.0), Err(AppError::BadRequest(_))));
    assert!(matches!(to_minor_units(-50.0), Err(AppError::BadRequest(_))));
}

#[test]
fn non_finite_price_is_rejected() {
    assert!(matches!(
        to_minor_units(f64::NAN),
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        to_minor_units(f64::INFINITY),
        Err(AppError::BadRequest(_))
    ));
}
