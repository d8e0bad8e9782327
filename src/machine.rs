pub mod demo;

pub use demo::DemoMachine;

/// The simulated machine as the monitor sees it.
///
/// The monitor never looks inside the machine; it drives execution, reads
/// memory, asks the machine's evaluator for expression values, and formats
/// nothing itself that the machine can format better. How instructions
/// execute, how faults behave, and what the expression grammar accepts are
/// all the implementor's business.
pub trait Machine {
    /// Advance the machine. Negative `steps` means run freely until the
    /// machine stops on its own; non-negative means execute exactly that
    /// many steps. Returns once the machine has stopped either way.
    fn execute(&mut self, steps: i64);

    /// Format and print the current architectural register state.
    fn display_registers(&self);

    /// Read `len` bytes of simulated memory starting at virtual address
    /// `addr`. Out-of-range behavior belongs to the machine.
    fn read_memory(&self, addr: u64, len: usize) -> Vec<u8>;

    /// Evaluate an operator-supplied expression. `None` means the text could
    /// not be evaluated; the caller owns user-facing messaging.
    fn evaluate(&self, expr: &str) -> Option<u64>;

    /// Note that the operator asked to quit, so the machine can leave its
    /// run state cleanly before the hosting process tears it down.
    fn request_quit(&mut self);
}
