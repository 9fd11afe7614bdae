use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use gloo_console::error;
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Position, PositionError};
use workout_tracker_lib::{workout::Coordinate, TrackerError};

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coordinate, TrackerError>>>>>;

fn reply(tx: &Reply, result: Result<Coordinate, TrackerError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

/// Asks the browser for the current position once. There is no timeout, an
/// unanswered permission prompt keeps this pending.
pub async fn current_position() -> Result<Coordinate, TrackerError> {
    let geolocation = window().navigator().geolocation().map_err(|err| {
        error!(format!("Geolocation not available: {:?}", err));
        TrackerError::LocationUnavailable
    })?;

    let (tx, rx) = oneshot::channel();
    let tx: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let tx = tx.clone();
        Closure::once(move |position: Position| {
            let coords = position.coords();
            reply(&tx, Ok(Coordinate::new(coords.latitude(), coords.longitude())));
        })
    };

    let on_error = {
        let tx = tx.clone();
        Closure::once(move |err: PositionError| {
            error!(format!("Position request failed: {}", err.message()));
            reply(&tx, Err(TrackerError::LocationUnavailable));
        })
    };

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|_| TrackerError::LocationUnavailable)?;

    // The closures have to outlive the request.
    let result = rx.await.unwrap_or(Err(TrackerError::LocationUnavailable));
    drop((on_success, on_error));
    result
}
