//! The virtual hexapod: a body transform plus six resolved legs.

use nalgebra::{Isometry3, Point2, Translation3, UnitQuaternion};

use hexstep_core::geometry::{
    ground_projection, point_in_convex_polygon, point_in_triangle, Point3, Transform,
};
use hexstep_core::{BodyDimensions, ConfigError, HexapodConfig, LegId, NUM_LEGS};
use hexstep_ik::{forward_kinematics, inverse_kinematics, JointAngles};

use crate::error::{LegFailure, PoseError};
use crate::hexagon::Hexagon;

/// World-frame transform of one leg's attachment: the body transform
/// composed with the vertex offset and the leg's fixed axis twist.
pub fn attachment_frame(body: &BodyDimensions, transform: &Transform, leg: LegId) -> Transform {
    let vertex = Hexagon::new(body).vertex(leg);
    let local = Isometry3::from_parts(
        Translation3::from(vertex.coords),
        UnitQuaternion::from_axis_angle(
            &hexstep_core::geometry::Vector3::z_axis(),
            leg.axis_angle_deg().to_radians(),
        ),
    );
    transform * local
}

/// A fully resolved hexapod pose: configuration, body transform, and six
/// joint-angle triples. World coordinates are derived on demand via
/// [`VirtualHexapod::project`]; stored state never mutates, so the pose is
/// always internally consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualHexapod {
    config: HexapodConfig,
    transform: Transform,
    angles: [JointAngles; NUM_LEGS],
}

/// World-space coordinates of every body and leg point, as produced by
/// [`VirtualHexapod::project`].
#[derive(Debug, Clone, PartialEq)]
pub struct HexapodProjection {
    /// Body vertices, head, and cog in world space.
    pub body: Hexagon,
    /// Per-leg chain points (body contact, coxa, femur, foot tip) in world
    /// space, canonical leg order.
    pub legs: [[Point3; 4]; NUM_LEGS],
}

impl VirtualHexapod {
    /// Pose-query entry point: accept joint angles directly, no solving.
    pub fn from_joint_angles(
        config: HexapodConfig,
        transform: Transform,
        angles: [JointAngles; NUM_LEGS],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            transform,
            angles,
        })
    }

    /// Solve the pose that places each foot tip at its world-space target.
    ///
    /// All-or-nothing: if any leg cannot reach its target, the error lists
    /// every failing leg with its individual kinematics failure, and no
    /// partially-updated hexapod is produced.
    pub fn build(
        config: HexapodConfig,
        transform: Transform,
        foot_targets_world: &[Point3; NUM_LEGS],
    ) -> Result<Self, PoseError> {
        config.validate()?;

        let mut angles = [JointAngles::default(); NUM_LEGS];
        let mut failures = Vec::new();

        for leg in LegId::ALL {
            let i = leg.index();
            let frame = attachment_frame(&config.body, &transform, leg);
            let local_target = frame.inverse_transform_point(&foot_targets_world[i]);
            match inverse_kinematics(&config.legs[i], &local_target) {
                Ok(solved) => angles[i] = solved,
                Err(error) => failures.push(LegFailure { leg, error }),
            }
        }

        if !failures.is_empty() {
            return Err(PoseError::Legs { failures });
        }

        Ok(Self {
            config,
            transform,
            angles,
        })
    }

    pub const fn config(&self) -> &HexapodConfig {
        &self.config
    }

    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    pub const fn joint_angles(&self) -> &[JointAngles; NUM_LEGS] {
        &self.angles
    }

    /// Recompute all body and leg points in world space. Pure derivation.
    pub fn project(&self) -> HexapodProjection {
        let body = Hexagon::new(&self.config.body).transformed(&self.transform);

        let mut legs = [[Point3::origin(); 4]; NUM_LEGS];
        for leg in LegId::ALL {
            let i = leg.index();
            let frame = attachment_frame(&self.config.body, &self.transform, leg);
            let pose = forward_kinematics(&self.config.legs[i], self.angles[i]);
            for (j, p) in pose.points().iter().enumerate() {
                legs[i][j] = frame.transform_point(p);
            }
        }

        HexapodProjection { body, legs }
    }

    /// World-space foot tips in canonical leg order.
    pub fn foot_tips_world(&self) -> [Point3; NUM_LEGS] {
        let projection = self.project();
        let mut tips = [Point3::origin(); NUM_LEGS];
        for i in 0..NUM_LEGS {
            tips[i] = projection.legs[i][3];
        }
        tips
    }

    /// The centroid dropped onto the ground plane.
    pub fn cog_projection(&self) -> Point3 {
        let cog = self.transform.transform_point(&Point3::origin());
        Point3::new(cog.x, cog.y, 0.0)
    }

    /// Static stability: do the grounded foot tips form a support polygon
    /// whose ground projection contains the centroid projection?
    ///
    /// Grounded feet are taken in canonical (counter-clockwise) order, so
    /// for ordinary stances the polygon is convex and correctly wound.
    /// Fewer than three grounded legs can never support the body; three
    /// grounded legs all on one side of the body cannot either, so both
    /// cases return false before any containment test runs.
    pub fn is_statically_stable(&self, grounded: &[bool; NUM_LEGS]) -> bool {
        let grounded_legs: Vec<LegId> = LegId::ALL
            .into_iter()
            .filter(|leg| grounded[leg.index()])
            .collect();

        if grounded_legs.len() < 3 {
            return false;
        }
        if grounded_legs.iter().all(|leg| leg.is_left())
            || grounded_legs.iter().all(|leg| !leg.is_left())
        {
            return false;
        }

        let tips = self.foot_tips_world();
        let polygon: Vec<Point2<f64>> = grounded_legs
            .iter()
            .map(|leg| ground_projection(&tips[leg.index()]))
            .collect();
        let cog = ground_projection(&self.cog_projection());

        if polygon.len() == 3 {
            point_in_triangle(&cog, &polygon[0], &polygon[1], &polygon[2])
        } else {
            point_in_convex_polygon(&cog, &polygon)
        }
    }
}
