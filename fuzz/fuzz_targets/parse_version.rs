#![no_main]

use libfuzzer_sys::fuzz_target;
use vc_version::Version;

fuzz_target!(|data: &str| {
    if let Ok(version) = Version::parse(data) {
        assert_eq!(version.to_string(), data);
    }
});
