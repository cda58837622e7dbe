//! The interning context: a bidirectional variable-name table.
//!
//! This is a from-scratch Rust reading of `libsat`'s `libsat_context` plus
//! its `string_to_intern`/`intern_to_string` red-black trees. The C original
//! shares one `intern_entry` between both trees via manual reference
//! counting; in Rust the natural equivalent is to let both indexes hold an
//! `Rc<str>` pointing at the same heap allocation, so the entry is dropped
//! exactly once, when both indexes have released their handle.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{ContextError, ContextResult};

/// A dense, non-negative integer uniquely identifying a variable within a
/// [`Context`]. `UNIQUE` ids are issued from the same counter as named ids
/// but are never inserted into either index.
///
/// # Example
///
/// ```
/// use propc_util::{Context, VariableGetFlags};
///
/// let mut ctx = Context::new();
/// let id = ctx.variable_get("x", VariableGetFlags::DEFAULT).unwrap();
/// assert_eq!(id.as_u32(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(u32);

impl VariableId {
    /// The raw id value, as issued by [`Context::variable_get`].
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<VariableId> for u32 {
    fn from(id: VariableId) -> u32 {
        id.0
    }
}

/// Flags controlling [`Context::variable_get`]'s lookup/creation behaviour.
///
/// `DEFAULT` is the empty flag set: return the existing id if present,
/// otherwise create one. The other three flags are bits that can be
/// combined with `|`, matching the scanner/parser's expectation of a plain
/// bitset rather than an enum of mutually exclusive modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariableGetFlags(u8);

impl VariableGetFlags {
    pub const DEFAULT: Self = Self(0);
    pub const CREATE: Self = Self(1 << 0);
    pub const REF: Self = Self(1 << 1);
    pub const UNIQUE: Self = Self(1 << 2);

    const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for VariableGetFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Owns the two interner indexes and the next-id counter.
///
/// Invariants (checked by the test suite, not re-asserted at runtime on
/// every call — see the module tests for the properties this upholds):
/// - every named entry appears in both `string_index` and `id_index`;
/// - `next_id` equals the number of distinct named entries plus the number
///   of `UNIQUE` ids ever issued;
/// - ids are never reused and never exceed `next_id - 1`.
#[derive(Debug, Default)]
pub struct Context {
    string_index: IndexMap<Rc<str>, VariableId>,
    id_index: IndexMap<VariableId, Rc<str>>,
    next_id: u32,
}

impl Context {
    /// Creates an empty context with both indexes empty and `next_id = 0`.
    pub fn new() -> Self {
        Self {
            string_index: IndexMap::new(),
            id_index: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Number of named (non-anonymous) interned variables.
    pub fn len(&self) -> usize {
        self.string_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.string_index.is_empty()
    }

    /// The name bound to `id`, if any. Returns `None` for ids that were
    /// never interned (e.g. `UNIQUE` ids, or ids from another context).
    pub fn name_of(&self, id: VariableId) -> Option<&str> {
        self.id_index.get(&id).map(|rc| rc.as_ref())
    }

    /// Gets or creates a variable id for `name`, per the flag semantics
    /// described in the module-level spec: `DEFAULT` look-up-or-create,
    /// `CREATE` fails if the name exists, `REF` fails if it doesn't,
    /// `UNIQUE` issues a fresh anonymous id without touching either index.
    ///
    /// # Example
    ///
    /// ```
    /// use propc_util::{Context, VariableGetFlags};
    ///
    /// let mut ctx = Context::new();
    /// let first = ctx.variable_get("x", VariableGetFlags::DEFAULT).unwrap();
    /// let second = ctx.variable_get("x", VariableGetFlags::DEFAULT).unwrap();
    /// assert_eq!(first, second);
    /// ```
    pub fn variable_get(
        &mut self,
        name: &str,
        flags: VariableGetFlags,
    ) -> ContextResult<VariableId> {
        if flags.contains(VariableGetFlags::CREATE) && flags.contains(VariableGetFlags::REF) {
            return Err(ContextError::IncompatibleFlags);
        }
        if flags.contains(VariableGetFlags::UNIQUE) && !flags.contains(VariableGetFlags::CREATE) {
            return Err(ContextError::IncompatibleFlags);
        }

        if flags.contains(VariableGetFlags::UNIQUE) {
            let id = VariableId(self.next_id);
            self.next_id += 1;
            return Ok(id);
        }

        if let Some(&existing) = self.string_index.get(name) {
            if flags.contains(VariableGetFlags::CREATE) {
                return Err(ContextError::CreateAlreadyExists);
            }
            return Ok(existing);
        }

        if flags.contains(VariableGetFlags::REF) {
            return Err(ContextError::RefNotFound);
        }

        let id = VariableId(self.next_id);
        let text: Rc<str> = Rc::from(name);

        // Insert by id first (the id is guaranteed fresh), then by string;
        // the string_index insert cannot fail once we've already confirmed
        // `name` was absent above, so there is nothing to roll back here in
        // practice. We still insert in the order the spec calls out as the
        // tidy one, so a future fallible string index swap stays correct.
        self.id_index.insert(id, Rc::clone(&text));
        self.string_index.insert(text, id);
        self.next_id += 1;

        Ok(id)
    }
}
