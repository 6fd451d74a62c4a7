//! quad-gen - tessellated quad generator
//!
//! Builds a quad from command-line parameters and writes it as an OBJ file
//! for inspection in any model viewer.

mod obj;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quad_mesh::{CornerMask, QuadParams, VertexUV, generate_quad_mesh};
use tracing::info;

#[derive(Parser)]
#[command(name = "quad-gen")]
#[command(about = "Generate a tessellated, optionally rounded quad as OBJ")]
#[command(version)]
struct Cli {
    /// Width along X
    #[arg(long, default_value_t = 1.0)]
    size_x: f32,

    /// Height along Y
    #[arg(long, default_value_t = 1.0)]
    size_y: f32,

    /// Vertices per row (including tab columns when rounded)
    #[arg(long, default_value_t = 2)]
    verts_x: u32,

    /// Vertices per column (including tab rows when rounded)
    #[arg(long, default_value_t = 2)]
    verts_y: u32,

    /// Corner radius, clamped to half the smaller side
    #[arg(short, long, default_value_t = 0.0)]
    radius: f32,

    /// Vertices per corner arc (0 = square corners)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    corner_verts: i32,

    /// Corners to round (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    corners: Vec<CornerArg>,

    /// Output OBJ file
    #[arg(short, long, default_value = "quad.obj")]
    output: PathBuf,

    /// Object name written to the OBJ file
    #[arg(long, default_value = "quad")]
    name: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum CornerArg {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl From<CornerArg> for CornerMask {
    fn from(corner: CornerArg) -> Self {
        match corner {
            CornerArg::TopRight => CornerMask::TOP_RIGHT,
            CornerArg::BottomRight => CornerMask::BOTTOM_RIGHT,
            CornerArg::BottomLeft => CornerMask::BOTTOM_LEFT,
            CornerArg::TopLeft => CornerMask::TOP_LEFT,
        }
    }
}

impl Cli {
    fn params(&self) -> QuadParams {
        let corner_mask = if self.corners.is_empty() {
            CornerMask::ALL
        } else {
            self.corners
                .iter()
                .fold(CornerMask::NONE, |mask, &c| mask.union(c.into()))
        };

        QuadParams::new(self.size_x, self.size_y)
            .with_verts(self.verts_x, self.verts_y)
            .with_rounded_corners(self.radius, self.corner_verts)
            .with_corner_mask(corner_mask)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let params = cli.params();

    let mesh = generate_quad_mesh::<VertexUV>(&params).context("Invalid quad parameters")?;

    obj::write_obj_file(&mesh, &cli.output, &cli.name)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        "Wrote {} ({} verts, {} tris)",
        cli.output.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}
