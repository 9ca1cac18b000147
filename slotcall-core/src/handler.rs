//! The type-erased callable stored in dispatch table slots.
//!
//! A [`Handler`] is the terminal point of a dispatch: the table resolves a
//! slot and invokes whatever the slot holds. Handlers are small `Copy`
//! values with no allocation behind them, so a table can keep an array of
//! them in static or stack memory and overwrite entries freely.
//!
//! # Binding forms
//!
//! 1. **Free function**: [`Handler::function`] wraps a `fn(Id)`.
//! 2. **Receiver + member function**: [`Handler::bound`] pairs a borrowed
//!    receiver with one of its methods.
//! 3. **Borrowed closure**: [`Handler::closure`] wraps a `&dyn Fn(Id)` for
//!    captured state that outlives the table.
//!
//! The default state is [`Handler::unbound`]: explicitly invalid, and a no-op
//! when invoked. Tables use that state as the "nothing registered here"
//! sentinel and route such slots to their fallback path.

use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr;

/// Integer identifier selecting a dispatch slot.
///
/// Interrupt vector numbers, message ids: anything small and dense enough to
/// index a fixed table.
pub type Id = usize;

/// A type-erased, allocation-free callback taking the identifier it was
/// dispatched under.
///
/// Handlers are `Copy` and overwritten by value; registration never chains or
/// composes them. The lifetime `'a` covers whatever the handler borrows (the
/// receiver of a bound method, the closure behind a closure handler). Free
/// functions and the unbound sentinel borrow nothing and satisfy any
/// lifetime.
#[derive(Clone, Copy)]
pub struct Handler<'a> {
    kind: Kind<'a>,
}

#[derive(Clone, Copy)]
enum Kind<'a> {
    Unbound,
    Function(fn(Id)),
    Closure(&'a dyn Fn(Id)),
    Bound {
        receiver: *const (),
        thunk: fn(*const (), Id),
        _receiver: PhantomData<&'a ()>,
    },
}

impl<'a> Handler<'a> {
    /// The explicitly-invalid state. Invoking it does nothing.
    pub const fn unbound() -> Self {
        Self {
            kind: Kind::Unbound,
        }
    }

    /// Binds a free function.
    ///
    /// `const`, so handler arrays for the static table variant can live in
    /// `const` items.
    pub const fn function(f: fn(Id)) -> Self {
        Self {
            kind: Kind::Function(f),
        }
    }

    /// Binds a borrowed closure.
    ///
    /// The closure must outlive every table slot the handler is copied into.
    pub fn closure(f: &'a dyn Fn(Id)) -> Self {
        Self {
            kind: Kind::Closure(f),
        }
    }

    /// Binds a receiver and one of its member functions.
    ///
    /// ```
    /// use slotcall_core::{Handler, Id};
    ///
    /// struct Uart {
    ///     base: usize,
    /// }
    ///
    /// impl Uart {
    ///     fn on_interrupt(&self, _id: Id) { /* drain the FIFO at self.base */ }
    /// }
    ///
    /// let uart = Uart { base: 0x4000_0000 };
    /// let handler = Handler::bound(&uart, Uart::on_interrupt);
    /// handler.invoke(5);
    /// ```
    pub fn bound<T>(receiver: &'a T, method: fn(&T, Id)) -> Self {
        // SAFETY: `&T` (T: Sized) and `*const ()` are ABI-compatible thin
        // pointers, so the erased signature may be called with the receiver
        // pointer `method` originally expected. The receiver stays valid for
        // `'a`, which the handler carries.
        let thunk = unsafe { mem::transmute::<fn(&T, Id), fn(*const (), Id)>(method) };
        Self {
            kind: Kind::Bound {
                receiver: ptr::from_ref(receiver).cast(),
                thunk,
                _receiver: PhantomData,
            },
        }
    }

    /// Whether the handler is bound to anything.
    ///
    /// Tables consult this on their fallback-capable paths; an unbound
    /// fallback means "silently drop".
    pub const fn is_valid(&self) -> bool {
        !matches!(self.kind, Kind::Unbound)
    }

    /// Invokes the callback with `id`.
    ///
    /// Invoking an unbound handler is a no-op.
    pub fn invoke(&self, id: Id) {
        match self.kind {
            Kind::Unbound => {}
            Kind::Function(f) => f(id),
            Kind::Closure(f) => f(id),
            Kind::Bound {
                receiver, thunk, ..
            } => thunk(receiver, id),
        }
    }
}

impl Default for Handler<'_> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl fmt::Debug for Handler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            Kind::Unbound => "unbound",
            Kind::Function(_) => "function",
            Kind::Closure(_) => "closure",
            Kind::Bound { .. } => "bound",
        };
        f.debug_tuple("Handler").field(&kind).finish()
    }
}
