// Screen/world conversions through the scene camera.
//
// The camera is a fixed look-at from (0, 0, camera_z) toward the origin;
// only its distance and field of view vary with scene mode and device
// class, so both directions take those as plain parameters.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR};

#[inline]
fn view_proj(width: f32, height: f32, camera_z: f32, fov_y_radians: f32) -> Mat4 {
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(fov_y_radians, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, camera_z), Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Compute a world-space ray from backing-store pixel coordinates.
///
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    camera_z: f32,
    fov_y_radians: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = view_proj(width, height, camera_z, fov_y_radians).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, camera_z);
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Project a world-space point to backing-store pixel coordinates.
/// `None` when the point is behind the camera.
pub fn world_to_screen(
    width: f32,
    height: f32,
    world: Vec3,
    camera_z: f32,
    fov_y_radians: f32,
) -> Option<Vec2> {
    let clip = view_proj(width, height, camera_z, fov_y_radians) * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}
