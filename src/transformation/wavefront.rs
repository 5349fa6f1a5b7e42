//! Wavefront (`.obj`) export of convex hulls.

use crate::transformation::ConvexHull;
use alloc::{string::ToString, vec};
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::io::Write;
use std::path::Path;

impl ConvexHull<'_> {
    /// Converts this hull to Wavefront data with a single object named `name`.
    ///
    /// Only the vertices referenced by the hull are needed by the triangles but, if the
    /// hull indexes the original point cloud, the whole cloud is exported.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_data(&self, name: &str) -> ObjData {
        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(
                                tri.iter()
                                    .map(|i| IndexTuple(*i as usize, None, None))
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: name.to_string(),
                    index: 0,
                    material: None,
                }],
                name: name.to_string(),
            }],
            ..Default::default()
        }
    }

    /// Writes this hull in the Wavefront (`.obj`) format to `out`.
    ///
    /// Vertices are written as `v x y z` lines and triangles as `f i j k` lines, with
    /// 1-based indices. This function is enabled by the `wavefront` feature flag.
    pub fn write_obj(&self, out: &mut impl Write, name: &str) -> Result<(), ObjError> {
        self.to_obj_data(name).write_to_buf(out)
    }

    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: &Path) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.write_obj(&mut file, &name)
    }
}
