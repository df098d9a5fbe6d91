#![no_main]
use libfuzzer_sys::fuzz_target;
use schedwire::ScheduleConfiguration;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens: Vec<&str> = s.lines().collect();
        if let Ok(config) = ScheduleConfiguration::decode(&tokens) {
            let wire = config.encode();
            let again = ScheduleConfiguration::decode(&wire)
                .expect("encoded output must decode");
            assert_eq!(again, config, "decode(encode(config)) changed the configuration");
            assert_eq!(again.encode(), wire, "encode is not a fixed point");
        }
    }
});
