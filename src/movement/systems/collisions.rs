//! Movement domain: ground probe overlap tests and grounded transitions.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    GroundContact, GroundProbe, GroundTransition, Landed, LeftGround, MovementConfig,
    MovementState, Surface,
};

const FALLBACK_HALF_EXTENTS: Vec2 = Vec2::new(0.5, 1.0);

impl GroundProbe {
    /// Probe center offset and size for a character with the given collider.
    pub fn region(&self, collider: Option<&Collider>) -> (Vec2, Vec2) {
        let half_extents = collider
            .and_then(|c| {
                c.shape_scaled().as_cuboid().map(|cuboid| {
                    Vec2::new(cuboid.half_extents.x.abs(), cuboid.half_extents.y.abs())
                })
            })
            .unwrap_or(FALLBACK_HALF_EXTENTS);

        let offset = self
            .offset
            .unwrap_or_else(|| Vec2::new(0.0, -half_extents.y));
        let width = self.width.unwrap_or(half_extents.x * 2.0);

        (offset, Vec2::new(width, self.thickness))
    }
}

pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    surfaces: Query<&Surface>,
    mut query: Query<(
        Entity,
        &Position,
        &MovementConfig,
        &GroundProbe,
        Option<&Collider>,
        &mut GroundContact,
    )>,
) {
    for (entity, position, config, probe, collider, mut contact) in &mut query {
        let (offset, size) = probe.region(collider);
        // World-space, so parented characters probe where they are
        let center = position.0 + offset;
        let shape = Collider::rectangle(size.x, size.y);
        let filter = SpatialQueryFilter::default().with_excluded_entities([entity]);

        // Zero-distance cast: a plain overlap test
        let hits = spatial_query.shape_intersections(&shape, center, 0.0, &filter);
        let grounded = config.ground.touches(
            hits.iter()
                .map(|hit| surfaces.get(*hit).copied().unwrap_or_default()),
        );

        contact.set_if_neq(GroundContact(grounded));
    }
}

pub(crate) fn update_grounded(
    mut query: Query<(Entity, &GroundContact, &mut MovementState)>,
    mut landed: MessageWriter<Landed>,
    mut left_ground: MessageWriter<LeftGround>,
) {
    for (entity, contact, mut state) in &mut query {
        match state.update_grounded(contact.0) {
            Some(GroundTransition::Landed) => {
                debug!("Landed: entity={:?}", entity);
                landed.write(Landed { entity });
            }
            Some(GroundTransition::LeftGround) => {
                debug!("Left ground: entity={:?}, already_jumped reset", entity);
                left_ground.write(LeftGround { entity });
            }
            None => {}
        }
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn draw_ground_probes(
    settings: Res<crate::movement::ProbeGizmos>,
    mut gizmos: Gizmos,
    query: Query<(&Position, &GroundProbe, Option<&Collider>, &MovementState)>,
) {
    if !settings.enabled {
        return;
    }

    for (position, probe, collider, state) in &query {
        let (offset, size) = probe.region(collider);
        let center = position.0 + offset;
        let color = if state.is_grounded() {
            Color::srgb(0.0, 1.0, 0.0)
        } else {
            Color::srgb(0.5, 0.5, 0.5)
        };
        gizmos.rect_2d(bevy::math::Isometry2d::from_translation(center), size, color);
    }
}
