// The tolerance is process-global, so everything touching it lives in
// a single test.
use cpoly::{epsilon, reset_epsilon, set_epsilon, DEFAULT_EPSILON};
use cpoly::{Complex, Error, Polynomial};

fn log_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn tst_tolerance() {
    log_init();

    assert_eq!(epsilon(), DEFAULT_EPSILON);
    let a = Complex::new(1., 0.);
    let b = Complex::new(1.001, 0.);
    let coeffs = vec![Complex::ONE, Complex::new(1e-4, 0.)];
    assert_ne!(a, b);
    assert_eq!(Polynomial::new(coeffs.clone()).degree(), 1);
    assert!(a.try_div(Complex::new(0.01, 0.)).is_ok());

    set_epsilon(1e-2);
    assert_eq!(epsilon(), 1e-2);
    assert_eq!(a, b);
    assert_eq!(Polynomial::new(coeffs.clone()).degree(), 0);
    assert_eq!(
        a.try_div(Complex::new(0.01, 0.)),
        Err(Error::DivisionByZero)
    );

    reset_epsilon();
    assert_eq!(epsilon(), DEFAULT_EPSILON);
    assert_ne!(a, b);
    assert_eq!(Polynomial::new(coeffs).degree(), 1);

    assert!(std::panic::catch_unwind(|| set_epsilon(0.)).is_err());
    assert!(std::panic::catch_unwind(|| set_epsilon(f64::NAN)).is_err());
    assert_eq!(epsilon(), DEFAULT_EPSILON);
}
