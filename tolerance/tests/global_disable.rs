//! The disable flag is process-wide state, so everything that touches it
//! lives in this one test to keep it away from concurrently running tests.

use tolerance::*;

#[tolerant]
fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
    input.parse()
}

#[test]
fn global_flag_bypasses_every_form_of_tolerance() {
    let wrapped = tolerate::<&str, i32, _>().wrap(|input, _| input.parse::<i32>());

    assert!(!is_disabled());
    assert_eq!(wrapped.invoke("zero"), Ok(0));
    assert_eq!(parse("zero"), Ok(0));

    let previous = set_disabled(true);
    assert!(!previous);
    assert!(is_disabled());
    // per-call switch arguments are irrelevant while disabled
    assert!(
        wrapped
            .call("zero", Kwargs::new().arg("fail_silently", true))
            .is_err()
    );
    assert!(parse("zero").is_err());

    // clearing the flag restores prior behavior
    assert!(set_disabled(false));
    assert_eq!(wrapped.invoke("zero"), Ok(0));
    assert_eq!(parse("zero"), Ok(0));

    {
        let _guard = disabled();
        assert!(wrapped.invoke("zero").is_err());
        assert!(parse("zero").is_err());
    }
    assert!(!is_disabled());
    assert_eq!(wrapped.invoke("zero"), Ok(0));
}
