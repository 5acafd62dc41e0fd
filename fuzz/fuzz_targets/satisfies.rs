#![no_main]

use libfuzzer_sys::fuzz_target;
use vc_constraint::{Requirement, Version, satisfies};

fuzz_target!(|data: (&str, &str)| {
    let (version, expression) = data;
    let Ok(version) = Version::parse(version) else {
        return;
    };
    let lazy = satisfies(&version, expression);
    if let Ok(requirement) = Requirement::parse(expression) {
        assert_eq!(lazy, Ok(requirement.matches(&version)));
    }
});
