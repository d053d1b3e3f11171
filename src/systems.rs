use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::Time;
use crate::components::Input;
use crate::error::EngineError;
use crate::session::Session;

/// Feeds every queued player command to the session, in arrival order.
pub fn input_system(world: &mut World) -> Result<(), EngineError> {
    let events = world.resource_mut::<Input>().drain();
    if events.is_empty() {
        return Ok(());
    }

    let mut session = world.resource_mut::<Session>();
    for event in events {
        debug!("Input event: {event:?}");
        session.handle(event)?;
    }

    Ok(())
}

/// Runs as many fixed simulation steps as the clock has banked.
pub fn game_tick_system(world: &mut World) -> Result<(), EngineError> {
    let step = world.resource::<Time>().step();

    while world.resource_mut::<Time>().consume_step() {
        trace!("Game tick of {step:?}");
        world.resource_mut::<Session>().tick(step)?;
    }

    Ok(())
}
