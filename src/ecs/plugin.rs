use bevy_app::{App, Plugin};

use super::host::HostPlugin;
use super::systems::neurotoxin::NeurotoxinPlugin;

/// Aggregate plugin: the neurotoxin engine plus the host collaborators it
/// emits effects to.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((NeurotoxinPlugin, HostPlugin));
    }
}
