//! # Inbound Port - PinExchangeApi
//!
//! Primary driving port used by the presentation and capture layers.
//!
//! | Method | Typical caller |
//! |--------|----------------|
//! | `offer_pin` | "Issue code" button; result rendered as text and QR |
//! | `redeem_code` | Manual code entry |
//! | `redeem_scanned` | Camera frame decoded by an external QR reader |
//! | `list_inventory` / `list_catalog` | Display |

use crate::domain::{ExchangeResult, OfferCode, Pin, PoolStatus};
use crate::session::InventoryHandle;

/// Primary API for the pin exchange.
///
/// Implementations are internally synchronized; every method takes `&self`
/// and may be called from any thread.
///
/// # Example
///
/// ```rust,ignore
/// use pin_exchange::ports::PinExchangeApi;
///
/// fn trade(exchange: &impl PinExchangeApi) {
///     let alice = exchange.open_session();
///     let bob = exchange.open_session();
///
///     let pin_name = alice.list()[0].name.clone();
///     let code = exchange.offer_pin(&alice, &pin_name)?;
///
///     // Bob types the code shown on Alice's screen
///     let received = exchange.redeem_code(&bob, code.as_str())?;
/// }
/// ```
pub trait PinExchangeApi: Send + Sync {
    /// Starts a participant session and returns its inventory handle.
    fn open_session(&self) -> InventoryHandle;

    /// Puts the named pin up for exchange and returns its code.
    ///
    /// # Errors
    /// - `PinNotOwned`: the inventory holds no pin with that name
    /// - `CodeSpaceExhausted`: no fresh code could be issued
    fn offer_pin(&self, inventory: &InventoryHandle, pin_name: &str) -> ExchangeResult<OfferCode>;

    /// Redeems a code and appends the received pin to `inventory`.
    ///
    /// # Errors
    /// - `NotFound`: unknown or already redeemed code
    fn redeem_code(&self, inventory: &InventoryHandle, code: &str) -> ExchangeResult<Pin>;

    /// Redeems the first string decoded from a camera frame.
    ///
    /// # Errors
    /// - `NotFound`: nothing decoded, or the first code is not live
    fn redeem_scanned(&self, inventory: &InventoryHandle, decoded: &[String]) -> ExchangeResult<Pin>;

    /// Pins currently held, in acquisition order.
    fn list_inventory(&self, inventory: &InventoryHandle) -> Vec<Pin>;

    /// Every pin design in the catalog.
    fn list_catalog(&self) -> Vec<Pin>;

    /// Pool counters.
    fn pool_status(&self) -> PoolStatus;
}
