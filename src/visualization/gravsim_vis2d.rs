use std::collections::HashMap;

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::color::Rgb24;
use crate::simulation::driver::{FrameOutcome, TickDriver};
use crate::simulation::params::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::simulation::states::{BodyId, NVec2};
use crate::visualization::recording::RecordingRenderer;
use crate::visualization::InputEvent;

#[derive(Resource)]
struct Simulation(TickDriver<RecordingRenderer>);

#[derive(Resource)]
struct UnitCircle(Mesh2dHandle);

#[derive(Component)]
struct BodyMarker(pub BodyId);

fn to_color(c: Rgb24) -> Color {
    Color::srgb_u8(c.r, c.g, c.b)
}

// window coordinates have y down and the origin top-left, the camera looks at the centre
fn to_transform(center: &NVec2, radius: f64) -> Transform {
    let x = (center.x - WINDOW_WIDTH / 2.0) as f32;
    let y = (WINDOW_HEIGHT / 2.0 - center.y) as f32;
    Transform::from_xyz(x, y, 0.0).with_scale(Vec3::splat(radius as f32))
}

/// Open the window and drive `driver` at its engine's fps until the window closes
pub fn run_2d(driver: TickDriver<RecordingRenderer>) {
    let fps = driver.engine().params().fps;
    info!(fps, bodies = driver.engine().live_count(), "starting 2D viewer");

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "gravsim".into(),
                        resolution: (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                // tracing is already set up by the binary
                .disable::<LogPlugin>(),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(f64::from(fps)))
        .insert_resource(Simulation(driver))
        .add_systems(Startup, setup_system)
        .add_systems(FixedUpdate, tick_system)
        .add_systems(Update, (pick_input_system, sync_bodies_system).chain())
        .add_systems(Last, report_on_exit_system)
        .run();
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.spawn(Camera2dBundle::default());
    let mesh = Mesh2dHandle(meshes.add(Circle::new(1.0)));
    commands.insert_resource(UnitCircle(mesh));
}

fn tick_system(mut sim: ResMut<Simulation>, mut exit: EventWriter<AppExit>) {
    if sim.0.frame() == FrameOutcome::Quit {
        exit.send(AppExit::Success);
    }
}

fn pick_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sim: ResMut<Simulation>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        let point = NVec2::new(f64::from(cursor.x), f64::from(cursor.y));
        sim.0.renderer_mut().push_event(InputEvent::Pick(point));
    }
}

/// Mirror the last presented frame: one entity per body id
fn sync_bodies_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    circle: Res<UnitCircle>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &BodyMarker, &mut Transform, &Handle<ColorMaterial>)>,
) {
    let mut frame: HashMap<BodyId, _> = sim
        .0
        .renderer()
        .last_frame()
        .iter()
        .map(|call| (call.id, call))
        .collect();

    for (entity, BodyMarker(id), mut transform, material) in &mut query {
        match frame.remove(id) {
            Some(call) => {
                *transform = to_transform(&call.center, call.radius);
                let color = to_color(call.color);
                if materials.get(material).is_some_and(|m| m.color != color) {
                    if let Some(m) = materials.get_mut(material) {
                        m.color = color;
                    }
                }
            }
            None => commands.entity(entity).despawn(),
        }
    }

    // whatever is left appeared since the last frame
    for call in frame.into_values() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.0.clone(),
                material: materials.add(ColorMaterial::from(to_color(call.color))),
                transform: to_transform(&call.center, call.radius),
                ..default()
            },
            BodyMarker(call.id),
        ));
    }
}

fn report_on_exit_system(mut exits: EventReader<AppExit>, sim: Res<Simulation>) {
    if exits.read().next().is_some() {
        println!("{}", sim.0.stats());
    }
}
