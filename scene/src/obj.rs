use math::hcm::{Point3, Vec3};
use shape::Triangle;

/// A face corner: indices into the position and (optionally) normal tables, already resolved
/// to 0-based.
#[derive(Debug, Clone, Copy)]
struct Corner {
    position: usize,
    normal: Option<usize>,
}

/// Reads a Wavefront OBJ file into triangles. See `parse_obj`.
pub fn load_obj(path: &str, smooth: bool) -> Result<Vec<Triangle>, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("can't read '{}': {}", path, e))?;
    parse_obj(&text, smooth)
}

/// Parses Wavefront OBJ text into triangles, covering the `v`, `vn` and `f` records
/// (`f` corners in the `i`, `i/j`, `i//k` and `i/j/k` forms, with negative indices counting
/// from the end; polygons are fan-triangulated). Any other record is ignored.
///
/// When `smooth` is true and a face carries no normal indices, per-vertex normals are computed
/// by accumulating the (area-weighted) face normals around each vertex; otherwise faces without
/// normal indices are flat-shaded. Degenerate (zero-area) faces are skipped with a warning.
///
/// Malformed records produce an `Err` naming the offending line.
pub fn parse_obj(text: &str, smooth: bool) -> Result<Vec<Triangle>, String> {
    let mut positions: Vec<Point3> = vec![];
    let mut normals: Vec<Vec3> = vec![];
    let mut faces: Vec<[Corner; 3]> = vec![];

    for (index, line) in text.lines().enumerate() {
        let lineno = index + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let [x, y, z] = parse_triple(tokens, lineno)?;
                positions.push(Point3::new(x, y, z));
            }
            Some("vn") => {
                let [x, y, z] = parse_triple(tokens, lineno)?;
                normals.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                let corners = tokens
                    .map(|token| parse_corner(token, positions.len(), normals.len(), lineno))
                    .collect::<Result<Vec<_>, String>>()?;
                if corners.len() < 3 {
                    return Err(format!(
                        "line {}: face has {} corners, needs at least 3",
                        lineno,
                        corners.len()
                    ));
                }
                // Fan triangulation of polygons.
                for i in 1..corners.len() - 1 {
                    faces.push([corners[0], corners[i], corners[i + 1]]);
                }
            }
            // Comments and the remaining record kinds (o/g/s/usemtl/...) carry no geometry.
            _ => {}
        }
    }

    // Normals accumulated around each vertex, for faces that come without their own.
    let computed = if smooth {
        accumulate_vertex_normals(&positions, &faces)
    } else {
        vec![]
    };

    let mut triangles = vec![];
    for face in faces.iter() {
        let [c0, c1, c2] = *face;
        let (p0, p1, p2) = (
            positions[c0.position],
            positions[c1.position],
            positions[c2.position],
        );
        if (p2 - p0).cross(p2 - p1).is_zero() {
            log::warn!("skipping a zero-area face over {}, {}, {}", p0, p1, p2);
            continue;
        }
        let triangle = Triangle::new(p0, p1, p2);
        let triangle = match (c0.normal, c1.normal, c2.normal) {
            (Some(n0), Some(n1), Some(n2)) => {
                triangle.with_normals(normals[n0], normals[n1], normals[n2])
            }
            _ if smooth => {
                let smoothed = (
                    computed[c0.position].try_hat(),
                    computed[c1.position].try_hat(),
                    computed[c2.position].try_hat(),
                );
                match smoothed {
                    (Some(n0), Some(n1), Some(n2)) => triangle.with_normals(n0, n1, n2),
                    _ => triangle,
                }
            }
            _ => triangle,
        };
        triangles.push(triangle);
    }
    Ok(triangles)
}

fn parse_triple<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    lineno: usize,
) -> Result<[f32; 3], String> {
    let mut values = [0.0f32; 3];
    for value in values.iter_mut() {
        let token = tokens
            .next()
            .ok_or_else(|| format!("line {}: expected 3 numbers", lineno))?;
        *value = token
            .parse::<f32>()
            .map_err(|_| format!("line {}: '{}' is not a number", lineno, token))?;
    }
    Ok(values)
}

/// Parses one face corner `i`, `i/j`, `i//k` or `i/j/k` (1-based; negative counts from the
/// end of the table parsed so far).
fn parse_corner(
    token: &str,
    num_positions: usize,
    num_normals: usize,
    lineno: usize,
) -> Result<Corner, String> {
    let fields: Vec<&str> = token.split('/').collect();
    let position = resolve_index(fields[0], num_positions, lineno)?;
    let normal = match fields.get(2) {
        Some(field) if !field.is_empty() => Some(resolve_index(field, num_normals, lineno)?),
        _ => None,
    };
    Ok(Corner { position, normal })
}

fn resolve_index(field: &str, table_len: usize, lineno: usize) -> Result<usize, String> {
    let raw = field
        .parse::<i64>()
        .map_err(|_| format!("line {}: '{}' is not an index", lineno, field))?;
    let resolved = if raw > 0 {
        raw as usize - 1
    } else if raw < 0 {
        let back = (-raw) as usize;
        if back > table_len {
            return Err(format!("line {}: index {} out of range", lineno, raw));
        }
        table_len - back
    } else {
        return Err(format!("line {}: index can't be 0", lineno));
    };
    if resolved >= table_len {
        return Err(format!("line {}: index {} out of range", lineno, raw));
    }
    Ok(resolved)
}

/// Sums the unnormalized face normals around each vertex; the cross-product magnitude weighs
/// larger faces more. Callers normalize per use.
fn accumulate_vertex_normals(positions: &[Point3], faces: &[[Corner; 3]]) -> Vec<Vec3> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];
    for face in faces.iter() {
        let [c0, c1, c2] = *face;
        let (p0, p1, p2) = (
            positions[c0.position],
            positions[c1.position],
            positions[c2.position],
        );
        let face_normal = (p2 - p0).cross(p2 - p1);
        accumulated[c0.position] += face_normal;
        accumulated[c1.position] += face_normal;
        accumulated[c2.position] += face_normal;
    }
    accumulated
}
