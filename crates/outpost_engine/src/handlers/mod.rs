//! The standard verb handlers.
//!
//! Each handler answers exactly one verb family and ignores every other
//! intent by returning an empty string. [`standard`] lists them in the
//! order the dispatcher calls them.

mod examine;
mod help;
mod inventory;
mod movement;
mod observe;
mod pickup;
mod quit;
mod read;
mod save;
mod shoot;
mod talk;
mod torch;
mod usage;

pub use examine::ExamineHandler;
pub use help::{HelpHandler, INSTRUCTIONS};
pub use inventory::InventoryHandler;
pub use movement::MoveHandler;
pub use observe::ObserveHandler;
pub use pickup::PickUpHandler;
pub use quit::QuitHandler;
pub use read::ReadHandler;
pub use save::SaveHandler;
pub use shoot::ShootHandler;
pub use talk::TalkHandler;
pub use torch::{ActivateHandler, DeactivateHandler};
pub use usage::UseHandler;

use outpost_foundation::{ItemId, WorldState};

use crate::handler::Handler;

/// The standard handlers in registration order.
#[must_use]
pub fn standard() -> Vec<Box<dyn Handler>> {
    vec![
        Box::new(TalkHandler),
        Box::new(InventoryHandler),
        Box::new(ExamineHandler),
        Box::new(MoveHandler),
        Box::new(ObserveHandler),
        Box::new(PickUpHandler),
        Box::new(ReadHandler),
        Box::new(ShootHandler),
        Box::new(ActivateHandler),
        Box::new(HelpHandler::default()),
        Box::new(DeactivateHandler),
        Box::new(UseHandler),
        Box::new(SaveHandler),
        Box::new(QuitHandler),
    ]
}

fn item_name(world: &WorldState, id: ItemId) -> String {
    world.item(id).map(|item| item.name.clone()).unwrap_or_default()
}
