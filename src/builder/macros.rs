//! Macros for declaring transition tables.

/// Declare many `state --event--> state` edges in one block.
///
/// Each `from => { event => to, ... }` entry expands to
/// `machine.add_state(from).add_event_to(event, to)?`. States are created on
/// first mention, so the first `from` becomes the initial state, and a `from`
/// with an empty list is still registered as a terminal state. The whole
/// block evaluates to `Result<(), BuildError>` and stops at the first
/// duplicate event.
///
/// # Example
///
/// ```
/// use turnstile::{transitions, Machine};
///
/// let mut machine: Machine<&str, &str> = Machine::new();
/// transitions!(machine, {
///     "red" => { "timer" => "green" },
///     "green" => { "timer" => "yellow", "emergency" => "red" },
///     "yellow" => { "timer" => "red" },
/// })?;
///
/// assert_eq!(machine.initial_state().unwrap().id(), &"red");
/// assert_eq!(machine.dispatch(&"timer")?.id(), &"green");
/// assert_eq!(machine.dispatch(&"emergency")?.id(), &"red");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $machine:expr, {
            $(
                $from:expr => { $($event:expr => $to:expr),* $(,)? }
            ),* $(,)?
        }
    ) => {{
        let machine = &mut $machine;
        let mut declare = || -> ::std::result::Result<(), $crate::BuildError> {
            $(
                let from = $from;
                machine.add_state(::std::clone::Clone::clone(&from));
                $(
                    machine
                        .add_state(::std::clone::Clone::clone(&from))
                        .add_event_to($event, $to)?;
                )*
            )*
            Ok(())
        };
        declare()
    }};
}
