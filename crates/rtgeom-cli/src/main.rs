mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rtgeom::{
    math::point::Point,
    ray::Ray,
    scene::Scene,
    shape::{Hit, Hitable},
    utils::{counter, timer::timed_scope_log},
};
use utils::{AvailableScene, IntervalArg, Vec3Arg};

#[derive(Parser, Debug)]
/// Fire rays at the demo scenes and inspect their bounding boxes
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fire a single ray and print the closest hit
    Probe {
        /// Ray origin as `x,y,z`
        #[arg(long, allow_hyphen_values = true)]
        origin: Vec3Arg,

        /// Ray direction as `x,y,z`, not normalized
        #[arg(long, allow_hyphen_values = true)]
        direction: Vec3Arg,

        #[arg(long, default_value_t = 0.0)]
        time: f32,

        /// Valid parametric interval, as `a..b`
        #[arg(long, default_value = "0.001..inf", allow_hyphen_values = true)]
        range: IntervalArg,
    },
    /// Print the bounding box of every top level object
    Bounds {
        /// Time interval the boxes must cover, as `a..b`
        #[arg(long, default_value = "0..1", allow_hyphen_values = true)]
        time: IntervalArg,
    },
}

fn probe(scene: &Scene, ray: &Ray, range: IntervalArg) {
    log::info!("probing with origin {} direction {} time {}", ray.origin, ray.direction, ray.time);

    match scene.hit(ray, range.0.clone()) {
        Hit::Hit(record) => {
            let label = scene
                .material(record.material)
                .and_then(|m| m.label.as_deref())
                .unwrap_or("unnamed");
            println!("hit: {record} ({label})");
        }
        Hit::NoHit => println!("no hit in {range}"),
    }

    for (i, object) in scene.objects.iter().enumerate() {
        let Some(bounds) = object.bounding_box(ray.time..=ray.time) else {
            continue;
        };
        if let Some(crossed) = bounds.ray_intersect(ray, range.0.clone()) {
            println!(
                "crosses box of object #{i} {bounds} for t in {}..{}",
                crossed.start(),
                crossed.end()
            );
        }
    }
}

fn bounds(scene: &Scene, time: IntervalArg) {
    for (i, object) in scene.objects.iter().enumerate() {
        match object.bounding_box(time.0.clone()) {
            Some(bounds) => println!("object #{i}: {bounds}"),
            None => println!("object #{i}: unbounded"),
        }
    }
    match scene.bounding_box(time.0.clone()) {
        Some(bounds) => println!("scene: {bounds}"),
        None => println!("scene: unbounded"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("loading scene {:?}", args.scene);
    let scene = timed_scope_log("build scene", || {
        let mut scene = Scene::new();
        args.scene.insert_into(&mut scene);
        scene
    })
    .res;
    log::info!(
        "{} objects, {} materials",
        scene.objects.len(),
        scene.materials.len()
    );

    match args.command {
        Command::Probe {
            origin,
            direction,
            time,
            range,
        } => {
            if direction.0.length_squared() == 0.0 {
                anyhow::bail!("the ray direction must not be null");
            }
            let ray = Ray::new_at_time(Point(origin.0), direction.0, time);
            probe(&scene, &ray, range);
        }
        Command::Bounds { time } => bounds(&scene, time),
    }

    counter::report_counters();
    Ok(())
}
