use super::{App, Config};
use eframe::egui::{
    load::SizedTexture, Button, ComboBox, DragValue, Image, RichText, Sense, Slider, Stroke,
    TextureOptions, Ui,
};
use life_board::Preset;
use std::time::Instant;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
            self.last_step = Instant::now();
        }

        ui.add_enabled_ui(self.is_paused, |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("ms per generation: "));
            ui.add(
                Slider::new(
                    &mut self.step_interval_ms,
                    Config::MIN_STEP_INTERVAL_MS..=Config::MAX_STEP_INTERVAL_MS,
                )
                .logarithmic(true),
            );
        });

        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.generation
        )));
    }

    fn draw_board_controls(&mut self, ui: &mut Ui) {
        // board editing is locked while the game is running
        ui.add_enabled_ui(self.is_paused, |ui| {
            if ui.add(Self::new_button("Clear")).clicked() {
                self.clear_board();
            }

            let selected_name = self.selected_preset.map_or("Custom", Preset::name);
            let mut chosen = None;
            ComboBox::from_label(Self::new_text("Preset"))
                .selected_text(Self::new_text(selected_name))
                .show_ui(ui, |ui| {
                    for preset in Preset::ALL {
                        let checked = self.selected_preset == Some(preset);
                        if ui.selectable_label(checked, preset.name()).clicked() {
                            chosen = Some(preset);
                        }
                    }
                });
            if let Some(preset) = chosen {
                self.apply_preset(preset);
            }

            if ui.add(Self::new_button("Random soup")).clicked() {
                self.random_soup();
            }

            ui.horizontal(|ui| {
                if ui.add(Self::new_button("New board")).clicked() {
                    let side = self.side_input;
                    self.rebuild_board(side);
                }

                ui.label(Self::new_text("of side: "));
                ui.add(
                    DragValue::new(&mut self.side_input)
                        .range(Config::MIN_SIDE..=Config::MAX_SIDE),
                );
            });
        });
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_simulation_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_board_controls(ui);
                    });

                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_appearance_controls(ui);
                    });

                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });
        });
    }

    fn draw_board(&mut self, ui: &mut Ui, size_px: f32) {
        if self.board.observer_mut().take_dirty() {
            let image = self.board.observer().image().clone();
            self.texture.set(image, TextureOptions::NEAREST);
        }

        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));

        // manual editing is only possible while the game is paused
        if self.is_paused && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let rect = response.rect;
                let side = self.board.side();
                // board x runs down the screen, board y to the right
                let x = ((pos.y - rect.top()) / rect.height() * side as f32) as usize;
                let y = ((pos.x - rect.left()) / rect.width() * side as f32) as usize;
                let (x, y) = (x.min(side - 1), y.min(side - 1));
                if self.board.toggle_cell(x, y).is_ok() {
                    self.selected_preset = None;
                }
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_board(ui, size_px);
            });
        });
    }
}
