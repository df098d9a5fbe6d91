#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // One token per line; decode should only ever return Ok or Err
        let tokens: Vec<&str> = s.lines().collect();
        let _ = schedwire::ScheduleConfiguration::decode(&tokens);
    }
});
