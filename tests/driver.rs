use parity_kernel::{checked_complicated_function, complicated_function, run, RUN_A, RUN_B};

/// `run` is the kernel applied to its fixed arguments, unchanged.
#[test]
fn run_is_fixed_call() {
    assert_eq!((RUN_A, RUN_B), (7, 4));
    assert_eq!(run(), complicated_function(RUN_A, RUN_B));
    assert_eq!(run(), -679);
}

#[test]
fn run_is_repeatable() {
    let first = run();
    for _ in 0..16 {
        assert_eq!(run(), first);
    }
}

#[test]
fn checked_run_fits() {
    assert_eq!(checked_complicated_function(RUN_A, RUN_B), Some(run()));
}

mod exported {
    extern "C" {
        fn run() -> i32;
    }

    /// The unmangled `run` symbol a wasm host resolves by name.
    #[test]
    fn run_symbol_is_golden() {
        assert_eq!(unsafe { run() }, -679);
        assert_eq!(unsafe { run() }, parity_kernel::run());
    }
}
