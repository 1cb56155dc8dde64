mod common;

use std::{
    cmp::Ordering,
    panic::{self, AssertUnwindSafe},
    thread,
};

use common::{init_tracing, snapshot, Probe};
use lockstep::prelude::*;

#[test]
fn release_before_fetch_never_drives() {
    init_tracing();
    let probe = Probe::new(1..=3);
    let counters = probe.counters();

    pull(probe, |items| items.release());

    assert_eq!(counters.snapshot(), snapshot(0, 0, 0, 0));
}

#[test]
fn unused_puller_is_released_on_scope_exit() {
    init_tracing();
    let probe = Probe::new(["never"]);
    let counters = probe.counters();

    pull(probe, |_| ());

    assert_eq!(counters.snapshot(), snapshot(0, 0, 0, 0));
}

#[test]
fn double_release_does_not_resume_producer() {
    init_tracing();
    let probe = Probe::new(0..10);
    let counters = probe.counters();

    pull(probe, |items| {
        assert_eq!(items.fetch(), Some(0));
        items.release();
        items.release();
        assert_eq!(items.fetch(), None);
        assert!(matches!(items.try_fetch(), Err(PullError::Released)));
    });

    assert_eq!(counters.snapshot(), snapshot(1, 1, 1, 1));
}

#[test]
fn exhaustion_is_sticky() {
    init_tracing();
    let probe = Probe::new(['a', 'b']);
    let counters = probe.counters();

    pull(probe, |items| {
        assert_eq!(items.fetch(), Some('a'));
        assert_eq!(items.fetch(), Some('b'));
        for _ in 0..3 {
            assert_eq!(items.fetch(), None);
        }
        assert!(items.is_exhausted());
        assert_eq!(items.try_fetch().unwrap(), None);
    });

    assert_eq!(counters.snapshot(), snapshot(1, 2, 0, 1));
}

#[test]
fn owned_puller_moves_between_threads() {
    init_tracing();
    let probe = Probe::new(vec![10, 20, 30]);
    let counters = probe.counters();

    let mut items = probe.into_puller().unwrap();
    assert_eq!(items.fetch(), Some(10));

    let rest = thread::spawn(move || {
        let second = items.fetch();
        drop(items);
        second
    })
    .join()
    .unwrap();

    assert_eq!(rest, Some(20));
    assert_eq!(counters.snapshot(), snapshot(1, 2, 1, 1));
}

#[test]
fn producer_panic_surfaces_from_fetch_and_releases_other_side() {
    init_tracing();
    let failing = generate(|sink: &mut dyn FnMut(i32) -> Flow| {
        let _ = sink(1);
        panic!("source failed");
    });
    let other = Probe::new([1, 2, 3]);
    let counters = other.counters();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| compare(failing, other)));

    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"source failed"));
    assert_eq!(counters.snapshot(), snapshot(1, 1, 1, 1));
}

#[test]
fn panic_while_stopping_surfaces_from_release() {
    init_tracing();
    let stubborn = generate(|sink: &mut dyn FnMut(u8) -> Flow| {
        if sink(0).is_break() {
            panic!("refused to stop");
        }
    });

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pull(stubborn, |items| {
            assert_eq!(items.fetch(), Some(0));
            items.release();
        })
    }));

    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"refused to stop"));
}

#[test]
fn comparator_panic_still_releases_both_sides() {
    init_tracing();
    let left = Probe::new(0..100);
    let right = Probe::new(0..100);
    let (lc, rc) = (left.counters(), right.counters());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        compare_by(left, right, |a: i32, b: i32| {
            if a == 3 {
                panic!("comparator failed");
            }
            a.cmp(&b)
        })
    }));

    assert!(outcome.is_err());
    assert_eq!(lc.snapshot(), snapshot(1, 4, 1, 1));
    assert_eq!(rc.snapshot(), snapshot(1, 4, 1, 1));
}

#[test]
fn combiner_panic_in_zip_still_releases_both_sides() {
    init_tracing();
    let left = Probe::new(["x", "y", "z"]);
    let right = Probe::new(0..50);
    let (lc, rc) = (left.counters(), right.counters());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        zip_with(left, right, |s, n| {
            if n == 1 {
                panic!("combiner failed");
            }
            format!("{s}{n}")
        })
        .collect::<Vec<_>>()
    }));

    assert!(outcome.is_err());
    assert_eq!(lc.snapshot(), snapshot(1, 2, 1, 1));
    assert_eq!(rc.snapshot(), snapshot(1, 2, 1, 1));
}

#[test]
fn named_options_are_used_for_scoped_pulls() {
    init_tracing();
    let options = PullOptions::new().name("probe-worker").stack_size(256 * 1024);
    let seen = try_pull_with(
        &options,
        generate(|sink: &mut dyn FnMut(String) -> Flow| {
            let name = thread::current().name().unwrap_or_default().to_string();
            let _ = sink(name);
        }),
        |items| items.fetch(),
    )
    .unwrap();
    assert_eq!(seen.as_deref(), Some("probe-worker"));
}

#[test]
fn stack_size_is_read_from_environment() {
    std::env::set_var(lockstep::STACK_SIZE_ENV, "262144");
    assert_eq!(
        PullOptions::from_env().unwrap(),
        PullOptions::new().stack_size(262_144)
    );

    std::env::set_var(lockstep::STACK_SIZE_ENV, "lots");
    let err = PullOptions::from_env().unwrap_err();
    assert!(matches!(err, PullError::InvalidStackSize { .. }));

    std::env::remove_var(lockstep::STACK_SIZE_ENV);
    assert_eq!(PullOptions::from_env().unwrap(), PullOptions::new());
}

#[test]
fn nested_zips_run_inside_workers() {
    init_tracing();
    let inner = zip(range_step(0, 100, 1), repeat('n'));
    let triples: Vec<((i32, char), &str)> = zip(inner, vec!["a", "b"]).collect();
    assert_eq!(triples, vec![((0, 'n'), "a"), ((1, 'n'), "b")]);
    assert_eq!(
        compare(zip(vec![1, 2], vec![3, 4]), vec![(1, 3), (2, 5)]),
        Ordering::Less
    );
}
