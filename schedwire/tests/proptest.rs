use std::collections::BTreeSet;

use proptest::prelude::*;
use schedwire::{
    Defaults, RestartLimit, RestartWhenRunning, ScheduleConfiguration, ScheduleKind, Serial,
    TimeOfDay, VariantMut, WireText,
};

fn arb_time() -> impl Strategy<Value = TimeOfDay> {
    (0u32..86_400).prop_map(|s| TimeOfDay::from_seconds(s).unwrap())
}

fn arb_kind() -> impl Strategy<Value = ScheduleKind> {
    prop::sample::select(ScheduleKind::ALL.to_vec())
}

fn arb_restart() -> impl Strategy<Value = RestartLimit> {
    prop_oneof![
        (0u8..=10).prop_filter_map("finite", RestartLimit::count),
        Just(RestartLimit::UNLIMITED),
    ]
}

/// Any text the constructors accept; the pattern includes both delimiters so
/// rejected candidates are exercised too.
fn arb_serials() -> impl Strategy<Value = Vec<Serial>> {
    prop::collection::vec("[A-Z0-9;= -]{0,6}", 0..4)
        .prop_map(|raw| raw.into_iter().filter_map(|s| Serial::new(s).ok()).collect())
}

fn arb_name() -> impl Strategy<Value = WireText> {
    "[A-Za-z0-9_/;= ]{0,12}".prop_filter_map("field delimiter", |s| WireText::new(s).ok())
}

fn arb_date_time() -> impl Strategy<Value = Option<jiff::civil::DateTime>> {
    prop::option::of((2000i16..2100, 1i8..=12, 1i8..=28, arb_time()).prop_map(
        |(y, m, d, t)| jiff::civil::date(y, m, d).to_datetime(t.to_jiff()),
    ))
}

#[derive(Debug, Clone)]
struct Edits {
    kind: ScheduleKind,
    start: TimeOfDay,
    stop: Option<TimeOfDay>,
    stop_disabled: bool,
    overnight: Option<bool>,
    /// Order of the window steps; see `apply_window_step`.
    window_order: Vec<usize>,
    time_zone: WireText,
    repeat: (bool, u32),
    restart: RestartLimit,
    restart_delay: u32,
    restart_when_running: bool,
    flags: [bool; 4],
    days: Vec<bool>,
    calendar: WireText,
    serials: Vec<Serial>,
    deadline: (TimeOfDay, TimeOfDay),
    expiration: u64,
    range: (Option<jiff::civil::DateTime>, Option<jiff::civil::DateTime>),
}

prop_compose! {
    fn arb_edits()(
        kind in arb_kind(),
        start in arb_time(),
        stop in prop::option::of(arb_time()),
        stop_disabled in any::<bool>(),
        overnight in prop::option::of(any::<bool>()),
        window_order in Just((0..WINDOW_STEPS).collect::<Vec<_>>()).prop_shuffle(),
        time_zone in arb_name(),
        repeat in (any::<bool>(), prop_oneof![Just(0u32), 1u32..7200]),
        restart in arb_restart(),
        restart_delay in 0u32..120,
        restart_when_running in any::<bool>(),
        flags in any::<[bool; 4]>(),
        days in prop::collection::vec(any::<bool>(), 31),
        calendar in arb_name(),
        serials in arb_serials(),
        deadline in (arb_time(), arb_time()),
        expiration in 0u64..1_000_000_000,
        range in (arb_date_time(), arb_date_time()),
    ) -> Edits {
        Edits {
            kind, start, stop, stop_disabled, overnight, window_order, time_zone,
            repeat, restart, restart_delay, restart_when_running, flags, days,
            calendar, serials, deadline, expiration, range,
        }
    }
}

const WINDOW_STEPS: usize = 6;

/// One window setter; range bounds are ignored on other kinds.
fn apply_window_step(config: &mut ScheduleConfiguration, edits: &Edits, step: usize) {
    match step {
        0 => config.set_start_time(edits.start),
        1 => match edits.stop {
            Some(stop) => config.set_stop_time(stop),
            None => config.clear_stop_time(),
        },
        2 => config.set_stop_time_disabled(edits.stop_disabled),
        3 => {
            if let Some(overnight) = edits.overnight {
                config.set_overnight(overnight);
            }
        }
        4 => {
            config.set_start_date_time(edits.range.0);
        }
        _ => {
            config.set_stop_date_time(edits.range.1);
        }
    }
}

/// Build a configuration purely through the public setters, window setters
/// in arbitrary order.
fn build(edits: &Edits) -> ScheduleConfiguration {
    let defaults = Defaults::default();
    let mut config = ScheduleConfiguration::new_default(&defaults);
    config.switch_kind(edits.kind, &defaults);

    for &step in &edits.window_order {
        apply_window_step(&mut config, edits, step);
    }

    let base = config.base_mut();
    base.time_zone = edits.time_zone.clone();
    base.repeat_enabled = edits.repeat.0;
    base.repeat_interval = edits.repeat.1;
    base.restart_error_count = edits.restart;
    base.restart_delay_minutes = edits.restart_delay;
    base.restart_when_running = if edits.restart_when_running {
        RestartWhenRunning::Yes
    } else {
        RestartWhenRunning::No
    };
    base.skip_if_unsuccessful = edits.flags[3];

    let [a, b, c, _] = edits.flags;
    match config.variant_mut() {
        VariantMut::Daily(daily) => {
            daily.business_days = a;
            daily.business_calendar = edits.calendar.clone();
            daily.days.copy_from_slice(&edits.days[..7]);
        }
        VariantMut::Monthly(monthly) => {
            monthly.business_calendar = edits.calendar.clone();
            monthly.first_business_day = a;
            monthly.last_business_day = b;
            monthly.specific_days = c;
            monthly.months.copy_from_slice(&edits.days[..12]);
            monthly.days.copy_from_slice(&edits.days);
        }
        VariantMut::Continuous(continuous) => continuous.daily_restart = a,
        VariantMut::Dependent(dep) => {
            dep.run_on_failure = a;
            dep.restart_on_condition = b;
            dep.run_on_any = c;
            dep.use_min_start_time = !a;
            dep.run_every_time = !b;
            dep.dependent_serials = edits.serials.clone();
            dep.deadline_start = edits.deadline.0;
            dep.deadline_end = edits.deadline.1;
        }
        VariantMut::Temporary(temp) => {
            temp.queue_name = edits.calendar.clone();
            temp.expiration_time_millis = edits.expiration;
            temp.dependent_serials = edits.serials.clone();
        }
        VariantMut::Range(_) => {}
    }
    config
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any configuration reachable through the setters survives the wire.
    #[test]
    fn roundtrip_through_wire(edits in arb_edits()) {
        let config = build(&edits);
        let wire = config.encode();
        let decoded = ScheduleConfiguration::decode(&wire)
            .unwrap_or_else(|e| panic!("decode failed for {wire:?}: {e}"));
        prop_assert_eq!(decoded, config);
    }

    /// Re-encoding a decoded array yields the same token set, in any order.
    #[test]
    fn encode_decode_token_set(edits in arb_edits(), seed in any::<u64>()) {
        let mut wire = build(&edits).encode();
        let len = wire.len();
        wire.rotate_left((seed as usize) % len);
        let again = ScheduleConfiguration::decode(&wire).unwrap().encode();
        let a: BTreeSet<_> = wire.iter().collect();
        let b: BTreeSet<_> = again.iter().collect();
        prop_assert_eq!(a, b);
    }

    /// Overnight is never stale after the setters run.
    #[test]
    fn overnight_consistent_with_window(edits in arb_edits()) {
        let config = build(&edits);
        let base = config.base();
        if config.kind() == ScheduleKind::Range || base.stop_time_disabled() {
            prop_assert!(!base.overnight());
        }
        if let (Some(stop), true) = (base.stop_time(), base.overnight()) {
            prop_assert!(stop <= base.start_time());
        }
    }

    /// A decoded `Overnight` token never contradicts the window it came with.
    #[test]
    fn decoded_overnight_follows_window(edits in arb_edits(), flag in any::<bool>()) {
        let wire: Vec<String> = build(&edits)
            .encode()
            .into_iter()
            .map(|t| if t.starts_with("Overnight=") { format!("Overnight={flag}") } else { t })
            .collect();
        let decoded = ScheduleConfiguration::decode(&wire).unwrap();
        let base = decoded.base();
        match base.stop_time() {
            _ if decoded.kind() == ScheduleKind::Range || base.stop_time_disabled() => {
                prop_assert!(!base.overnight());
            }
            Some(stop) if stop < base.start_time() => {
                prop_assert!(base.overnight());
            }
            Some(stop) if stop > base.start_time() => {
                prop_assert!(!base.overnight());
            }
            _ => {}
        }
        prop_assert_eq!(ScheduleConfiguration::decode(&decoded.encode()).unwrap(), decoded);
    }

    /// Decoding arbitrary junk never panics.
    #[test]
    fn decode_never_panics(tokens in prop::collection::vec("[A-Za-z=;:0-9.]{0,24}", 0..12)) {
        let _ = ScheduleConfiguration::decode(&tokens);
    }
}
