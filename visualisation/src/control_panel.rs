use std::ops::RangeInclusive;

use bounce_engine::{ self as be, Config, ConfigChange };

/// The egui window editing the simulation config.
///
/// Widgets edit a draft copy, every edit is reported as a [`ConfigChange`]
/// for the simulation to apply.
pub struct ControlPanel {
    draft: Config,
}

impl ControlPanel {
    pub fn new(config: &Config) -> Self {
        Self { draft: config.clone() }
    }

    /// Drops the draft in favour of the simulation's actual config
    pub fn sync(&mut self, config: &Config) {
        self.draft = config.clone();
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Vec<ConfigChange> {
        let mut changes = Vec::new();

        egui::Window::new("Parameters")
            .default_pos((10., 10.))
            .resizable(false)
            .show(ctx, |ui| {
                if ui.button("Reset").clicked() {
                    self.draft = Config::default();
                    changes.push(ConfigChange::Reset);
                }

                let draft = &mut self.draft;

                if slider(ui, &mut draft.gravity, be::GRAVITY_RANGE, 0.01, "gravity").changed() {
                    changes.push(ConfigChange::Gravity(draft.gravity));
                }
                if slider(ui, &mut draft.bounce_damping, be::BOUNCE_DAMPING_RANGE, 0.001, "bounce").changed() {
                    changes.push(ConfigChange::BounceDamping(draft.bounce_damping));
                }

                // Both respawn every body, wait for the edit to be over
                let response = slider(ui, &mut draft.max_body_radius, be::MAX_BODY_RADIUS_RANGE, 1., "max radius");
                if finished(&response) {
                    changes.push(ConfigChange::MaxBodyRadius(draft.max_body_radius));
                }
                let response = slider(ui, &mut draft.max_body_mass, be::MAX_BODY_MASS_RANGE, 0.1, "max mass");
                if finished(&response) {
                    changes.push(ConfigChange::MaxBodyMass(draft.max_body_mass));
                }

                ui.separator();

                let response = slider(ui, &mut draft.cursor_radius, be::CURSOR_RADIUS_RANGE, 1., "cursor radius");
                if finished(&response) {
                    changes.push(ConfigChange::CursorRadius(draft.cursor_radius));
                }
                let response = slider(ui, &mut draft.cursor_mass, be::CURSOR_MASS_RANGE, 0.1, "cursor mass");
                if finished(&response) {
                    changes.push(ConfigChange::CursorMass(draft.cursor_mass));
                }

                let mut rgb = draft.cursor_color.to_array();
                let color_changed = ui.horizontal(|ui| {
                    let response = ui.color_edit_button_srgb(&mut rgb);
                    ui.label("cursor color");
                    response.changed()
                }).inner;
                if color_changed {
                    draft.cursor_color = rgb.into();
                    draft.cursor_visible = true;
                    changes.push(ConfigChange::CursorColor(draft.cursor_color));
                }

                if ui.checkbox(&mut draft.cursor_visible, "show cursor").changed() {
                    changes.push(ConfigChange::CursorVisible(draft.cursor_visible));
                }
                if slider(ui, &mut draft.collision_restitution, be::RESTITUTION_RANGE, 0.001, "restitution").changed() {
                    changes.push(ConfigChange::CollisionRestitution(draft.collision_restitution));
                }
            });

        changes
    }
}

fn slider(ui: &mut egui::Ui, value: &mut f64, range: RangeInclusive<f64>, step: f64, text: &str) -> egui::Response {
    ui.add(egui::Slider::new(value, range).step_by(step).text(text))
}

/// Whether an edit is over: the drag was released or the value was typed in
fn finished(response: &egui::Response) -> bool {
    response.drag_stopped() || (response.changed() && !response.dragged())
}
