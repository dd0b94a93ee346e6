//! Preetham all-weather analytic zenith color.

use glam::{Vec3, Vec4};

/// Zenith color in Yxy for a given sun elevation and atmospheric turbidity.
///
/// `sun_dir_y` is the vertical component of the (normalized) sun direction
/// vector; `turbidity` is the Preetham haze measure, meaningful roughly in
/// `[2, 32]`. Returns `(Y, x, y)`: absolute zenith luminance plus CIE
/// chromaticity. The chunk shader converts to RGB.
pub fn all_weather_zenith(sun_dir_y: f32, turbidity: f32) -> Vec3 {
    let theta_sun = sun_dir_y.clamp(-1.0, 1.0).acos();

    // Cubic chromaticity polynomials in theta_sun, per turbidity power.
    let cx1 = Vec4::new(0.0, 0.00209, -0.00375, 0.00165);
    let cx2 = Vec4::new(0.00394, -0.03202, 0.06377, -0.02903);
    let cx3 = Vec4::new(0.25886, 0.06052, -0.21196, 0.11693);
    let cy1 = Vec4::new(0.0, 0.00317, -0.00610, 0.00275);
    let cy2 = Vec4::new(0.00516, -0.04153, 0.08970, -0.04214);
    let cy3 = Vec4::new(0.26688, 0.06670, -0.26756, 0.15346);

    let t2 = turbidity * turbidity;
    let chi = (4.0 / 9.0 - turbidity / 120.0) * (std::f32::consts::PI - 2.0 * theta_sun);
    let theta = Vec4::new(
        1.0,
        theta_sun,
        theta_sun * theta_sun,
        theta_sun * theta_sun * theta_sun,
    );

    let luminance = (4.0453 * turbidity - 4.9710) * chi.tan() - 0.2155 * turbidity + 2.4192;
    let x = t2 * cx1.dot(theta) + turbidity * cx2.dot(theta) + cx3.dot(theta);
    let y = t2 * cy1.dot(theta) + turbidity * cy2.dot(theta) + cy3.dot(theta);

    Vec3::new(luminance, x, y)
}
