use std::fmt;

/// Number of watchpoint slots. Allocation past this fails instead of growing,
/// mirroring the bounded breakpoint units of real hardware.
pub const NR_WATCHPOINTS: usize = 32;

/// One active conditional breakpoint: the operator's original expression text
/// plus the value it evaluated to when it was set. Re-checking the expression
/// each step is the execution engine's job; the pool only stores the value.
#[derive(Debug, Clone)]
pub struct Watchpoint {
    pub id: u32,
    pub expr: String,
    pub last_value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// Every slot is in use.
    Exhausted,
    /// No active watchpoint carries this id.
    NotFound(u32),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Exhausted => write!(f, "watchpoint pool exhausted"),
            PoolError::NotFound(id) => write!(f, "no watchpoint with id {}", id),
        }
    }
}

impl std::error::Error for PoolError {}

/// Fixed-capacity arena of watchpoints.
///
/// Every slot is at all times either on the free list or in `order`, never
/// both. Display ids come from a monotonic counter rather than the slot
/// index, so the numbering the operator sees stays stable even while slots
/// are recycled underneath. `order` keeps creation order for listing and
/// deletion.
#[derive(Debug)]
pub struct WatchpointPool {
    slots: Vec<Option<Watchpoint>>,
    free: Vec<usize>,
    order: Vec<usize>,
    next_id: u32,
}

impl WatchpointPool {
    pub fn new() -> Self {
        Self::with_capacity(NR_WATCHPOINTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            // Pop from the back, so lower slot indices are handed out first.
            free: (0..capacity).rev().collect(),
            order: Vec::with_capacity(capacity),
            next_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently active watchpoints.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Takes a free slot for `expr`, recording the value it evaluated to at
    /// creation time. Returns the display id of the new watchpoint.
    pub fn allocate(&mut self, expr: &str, initial_value: u64) -> Result<u32, PoolError> {
        let slot = self.free.pop().ok_or(PoolError::Exhausted)?;
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.slots[slot] = Some(Watchpoint {
            id,
            expr: expr.to_string(),
            last_value: initial_value,
        });
        self.order.push(slot);
        Ok(id)
    }

    /// Returns the slot holding `id` to the free list. The only way a slot
    /// leaves the active set; freeing an id twice reports `NotFound` the
    /// second time because the id is no longer active.
    pub fn free(&mut self, id: u32) -> Result<(), PoolError> {
        let pos = self
            .order
            .iter()
            .position(|&slot| matches!(&self.slots[slot], Some(wp) if wp.id == id))
            .ok_or(PoolError::NotFound(id))?;
        let slot = self.order.remove(pos);
        debug_assert!(self.slots[slot].is_some());
        self.slots[slot] = None;
        self.free.push(slot);
        Ok(())
    }

    /// Operator-facing wrapper over [`free`](Self::free) for the delete
    /// command: reports success as a bool instead of raising.
    pub fn delete(&mut self, id: u32) -> bool {
        self.free(id).is_ok()
    }

    /// Active watchpoints in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Watchpoint> {
        self.order.iter().filter_map(|&slot| self.slots[slot].as_ref())
    }
}

impl Default for WatchpointPool {
    fn default() -> Self {
        Self::new()
    }
}
