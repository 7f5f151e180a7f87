use std::f32::consts::PI;
use std::f64::consts::FRAC_PI_2;
use bevy::prelude::*;
use log::{info, warn};
use rand::Rng;
use ik_solver::constraint::{AxisRanges, Range};
use ik_solver::math::{quaternion, Quaternion, V3};
use ik_solver::solve3d::{self, Constraint, JointTransform, Link};
use ik_solver::{CcdOptions, FabrikOptions, LearningRate, SolveOptions};


const LINK_LENGTH: f32 = 3.0;
const LINK_COUNT: usize = 3;
const ACCEPTED_ERROR: f64 = 0.05;

#[derive(Clone, Copy, PartialEq)]
pub enum ChainState {
	Seeking {
		target: Vec3,
		frames_left: i32,
	},
	Waiting {
		wait_frames: i32,
	},
	Done,
}

impl Default for ChainState {
	fn default() -> Self { ChainState::Done }
}

#[derive(Component)]
pub struct IsJoint;

#[derive(Component)]
pub struct IsTarget;

#[derive(Component)]
pub struct Chain {
	pub links: Vec<Link>,
	pub options: SolveOptions,
	pub state: ChainState,
	/// Solve calls per fixed tick.
	pub iterations: usize,
	pub target: Entity,
}

impl Chain {
	/// Pedestal top, pointing the chain's forward axis up.
	pub fn base() -> JointTransform {
		JointTransform::new(V3::zeros(), quaternion::from_euler_angles(&V3::new(0.0, 0.0, FRAC_PI_2)))
	}

	/// Runs the configured number of solve calls, `true` once within the
	/// accepted error.
	fn seek(&mut self, target: Vec3) -> ik_solver::Result<bool> {
		let target = to_v3(target);

		for _ in 0..self.iterations {
			let result = solve3d::solve(&self.links, &Self::base(), &target, &self.options)?;
			self.links = result.links;
			if result.is_within_accepted_error {
				return Ok(true);
			}
		}
		Ok(false)
	}
}

fn to_v3(v: Vec3) -> V3 {
	V3::new(v.x as f64, v.y as f64, v.z as f64)
}

fn to_vec3(v: &V3) -> Vec3 {
	Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

fn to_quat(q: &Quaternion) -> Quat {
	Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32)
}

// right handed
// azimuth from z to x
// elevation from y
fn to_view_direction(azimuth: f32, elevation: f32) -> Vec3 {
	Vec3::new(
		azimuth.sin() * elevation.sin(),
		elevation.cos(),
		azimuth.cos() * elevation.sin(),
	)
}

fn dome_point(radius: f32) -> Vec3 {
	let mut rng = rand::thread_rng();

	let unit = to_view_direction(
		rng.gen_range(0.0..PI),
		rng.gen_range(-PI * 0.5..PI * 0.5)
	);
	unit * rng.gen_range(radius * 0.3..radius * 0.8)
}

pub fn chain_system(
	mut q_chain: Query<(&mut Chain, &Transform), Without<IsTarget>>,
	mut q_target: Query<&mut Transform, With<IsTarget>>
) {
	for (mut chain, &chain_transform) in q_chain.iter_mut() {
		let chain = &mut *chain;

		match chain.state {
			ChainState::Done => {
				let target = dome_point(LINK_LENGTH * LINK_COUNT as f32);

				if let Ok(mut target_transform) = q_target.get_mut(chain.target) {
					target_transform.translation = chain_transform * target;
				}

				chain.state = ChainState::Seeking { target, frames_left: 180 };
			},
			ChainState::Seeking { target, frames_left } => {
				chain.state = match chain.seek(target) {
					Ok(true) => {
						info!("{} reached target", chain.options.method_name());
						ChainState::Waiting { wait_frames: 60 }
					},
					Ok(false) if frames_left == 0 => ChainState::Waiting { wait_frames: 60 },
					Ok(false) => ChainState::Seeking { target, frames_left: frames_left - 1 },
					Err(error) => {
						warn!("{} solve failed: {}", chain.options.method_name(), error);
						ChainState::Done
					},
				};
			},
			ChainState::Waiting { wait_frames } => {
				chain.state = if wait_frames == 0 {
					ChainState::Done
				} else {
					ChainState::Waiting { wait_frames: wait_frames - 1 }
				};
			},
		}
	}
}

pub fn chain_mesh_system(q_chain: Query<(&Chain, &Children)>, mut q_joints: Query<&mut Transform, With<IsJoint>>) {
	for (chain, children) in q_chain.iter() {
		let transforms = solve3d::get_joint_transforms(&chain.links, &Chain::base()).transforms;

		// a link is drawn from its base joint, turned by its own absolute rotation
		for (joints, &child) in transforms.windows(2).zip(children.iter()) {
			let mut transform = match q_joints.get_mut(child) {
				Ok(transform) => transform,
				Err(_) => continue,
			};

			*transform = Transform {
				translation: to_vec3(&joints[0].position),
				rotation: to_quat(&joints[1].rotation),
				..Default::default()
			};
		}
	}
}

pub fn setup_chains(
	mut commands: Commands,
	mut meshes: ResMut<Assets<Mesh>>,
	mut materials: ResMut<Assets<StandardMaterial>>,
) {
	let make_chain = &mut |position: Vec3, options: SolveOptions, iterations: usize| {
		const CHAINS_COLOR: Color = Color::rgb(0.8, 0.7, 0.6);
		const WIDTH: f32 = 0.8;

		let joint_pbr: PbrBundle = PbrBundle {
			mesh: meshes.add(Mesh::from(shape::Box {
				min_x: 0.0,
				max_x: LINK_LENGTH,
				min_y: -WIDTH / 2.0,
				max_y:  WIDTH / 2.0,
				min_z: -WIDTH / 2.0,
				max_z:  WIDTH / 2.0,
			})),
			material: materials.add(CHAINS_COLOR.into()),
			..Default::default()
		};

		// no twisting about the link's own axis past the base
		let no_twist = Constraint::Axes(AxisRanges { pitch: Some(Range::Symmetric(0.0)), ..Default::default() });
		let links: Vec<Link> = (0..LINK_COUNT).map(|index| {
			let link = Link::with_length(LINK_LENGTH as f64);
			if index == 0 { link } else { link.with_constraint(no_twist) }
		}).collect();

		const PEDESTAL_SIZE: f32 = 2.0;
		commands.spawn_bundle(PbrBundle {
			mesh: meshes.add(Mesh::from(shape::Cube::new(PEDESTAL_SIZE))),
			transform: Transform::from_xyz(position.x, position.y + PEDESTAL_SIZE / 2.0, position.z),
			material: materials.add(CHAINS_COLOR.into()),
			..Default::default()
		});

		let target = commands.spawn_bundle(PbrBundle {
			mesh: meshes.add(Mesh::from(shape::Cube::new(1.0))),
			..Default::default()
		}).insert(IsTarget).id();

		let joint_ids: Vec<Entity> = (0..LINK_COUNT)
			.map(|_| commands.spawn_bundle(joint_pbr.clone()).insert(IsJoint).id())
			.collect();

		commands
			.spawn()
			.insert(Chain { links, options, iterations, target, state: ChainState::default() })
			.insert(Transform::from_xyz(position.x, position.y + PEDESTAL_SIZE, position.z))
			.insert(GlobalTransform::default())
			.push_children(&joint_ids);
	};

	// slows down close to the target, where a constant rate starts to orbit it
	let fabrik = FabrikOptions {
		learning_rate: LearningRate::by_reach(LINK_LENGTH as f64 * LINK_COUNT as f64),
		accepted_error: ACCEPTED_ERROR,
		..Default::default()
	};
	let ccd = CcdOptions {
		learning_rate: 0.5.into(),
		accepted_error: ACCEPTED_ERROR,
	};

	make_chain(Vec3::new(-6.0, 0.0, -6.0), fabrik.into(), 40);
	make_chain(Vec3::new(6.0, 0.0, 6.0), ccd.into(), 1);
}
