//! The port list window: a label, the list itself, and a refresh button.

use eframe::egui;
use log::debug;
use portview::Platform;

/// Replace `list` with a fresh enumeration result.
///
/// The previous contents are discarded wholesale; entries are never merged
/// or updated in place.
pub fn refresh_port_list(list: &mut Vec<String>, platform: Platform) {
    *list = portview::available_ports(platform);
    debug!("refreshed port list: {} available", list.len());
}

/// Application state: the platform category fixed at startup and the most
/// recent enumeration result.
pub struct PortListApp {
    platform: Platform,
    ports: Vec<String>,
}

impl PortListApp {
    /// Create the app with an initial enumeration already done.
    pub fn new(platform: Platform) -> Self {
        let mut ports = Vec::new();
        refresh_port_list(&mut ports, platform);
        Self { platform, ports }
    }
}

impl eframe::App for PortListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.label("Serial List:");
                    // Probing runs right here on the UI thread; the window
                    // stalls until it finishes.
                    if ui.button("Refresh").clicked() {
                        refresh_port_list(&mut self.ports, self.platform);
                    }
                });

                ui.group(|ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            if self.ports.is_empty() {
                                ui.weak("no serial ports available");
                            } else {
                                for port in &self.ports {
                                    ui.monospace(port);
                                }
                            }
                        });
                });
            });
        });
    }
}
