use eframe::egui;
use egui_action_menu::{ActionDescriptor, ActionMenuButton};
use egui_phosphor::regular as icons;
use log::{info, warn};
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::DemoConfig;
use crate::style;
use crate::utils;

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}

pub struct DemoApp {
    pub documents: Vec<Document>,
    pub actions: Vec<ActionDescriptor>,
    pub status: String,
    /// Menu instance per document, so a deleted document's menu state can be dropped.
    pub menu_ids: HashMap<Uuid, egui::Id>,
}

impl DemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &DemoConfig) -> Self {
        utils::setup_fonts(&cc.egui_ctx);
        Self::from_config(config)
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        let actions = config.descriptors().unwrap_or_else(|e| {
            warn!("Invalid action config, using defaults: {}", e);
            DemoConfig::default().descriptors().unwrap_or_default()
        });
        Self {
            documents: vec![
                Document::new("Quarterly report"),
                Document::new("Team roadmap"),
                Document::new("Launch checklist"),
            ],
            actions,
            status: "Pick an action from a document menu".to_string(),
            menu_ids: HashMap::new(),
        }
    }

    /// Business logic behind the menu entries. The widget only reports names.
    pub fn handle_action(&mut self, document_id: Uuid, action: &str) {
        let Some(index) = self.documents.iter().position(|d| d.id == document_id) else {
            warn!("Action '{}' for unknown document {}", action, document_id);
            return;
        };
        let title = self.documents[index].title.clone();
        match action {
            "edit" | "rename" => {
                self.documents[index].title = format!("{} (edited)", title);
            }
            "duplicate" => {
                let copy = Document::new(format!("{} (copy)", title));
                self.documents.insert(index + 1, copy);
            }
            "delete" => {
                self.documents.remove(index);
            }
            _ => {}
        }
        info!("Handled '{}' on '{}'", action, title);
        self.status = format!("{}: {}", action, title);
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let mut pending: Vec<(Uuid, String)> = Vec::new();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let menu_theme = style::menu_theme(ui.visuals());
            ui.heading(format!("{} Documents", icons::FOLDER_OPEN));
            ui.separator();
            if self.documents.is_empty() {
                ui.label("No documents");
            }
            let menu_ids = &mut self.menu_ids;
            for document in &self.documents {
                ui.horizontal(|ui| {
                    ui.label(icons::FILE_TEXT);
                    ui.label(&document.title);
                    let response = ActionMenuButton::new(&self.actions)
                        .id_salt(document.id)
                        .theme(menu_theme.clone())
                        .on_action_click(|name| pending.push((document.id, name.to_owned())))
                        .show(ui);
                    menu_ids.insert(document.id, response.id);
                });
            }
        });

        for (document_id, action) in pending {
            self.handle_action(document_id, &action);
            if !self.documents.iter().any(|d| d.id == document_id) {
                if let Some(menu_id) = self.menu_ids.remove(&document_id) {
                    ActionMenuButton::forget(ctx, menu_id);
                }
            }
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use egui_action_menu::MenuState;
    use egui_kittest::kittest::Queryable;
    use egui_phosphor::regular::{DOTS_THREE_VERTICAL, TRASH};

    fn app() -> DemoApp {
        DemoApp::from_config(&DemoConfig::default())
    }

    #[test]
    fn delete_removes_only_that_document() {
        let mut app = app();
        let target = app.documents[1].id;
        app.handle_action(target, "delete");
        assert_eq!(app.documents.len(), 2);
        assert!(app.documents.iter().all(|d| d.id != target));
        assert_eq!(app.status, "delete: Team roadmap");
    }

    #[test]
    fn duplicate_inserts_after_original() {
        let mut app = app();
        let target = app.documents[0].id;
        app.handle_action(target, "duplicate");
        assert_eq!(app.documents.len(), 4);
        assert_eq!(app.documents[1].title, "Quarterly report (copy)");
        assert_ne!(app.documents[1].id, target);
    }

    #[test]
    fn edit_changes_title() {
        let mut app = app();
        let target = app.documents[2].id;
        app.handle_action(target, "edit");
        assert_eq!(app.documents[2].title, "Launch checklist (edited)");
    }

    #[test]
    fn unknown_action_only_updates_status() {
        let mut app = app();
        let before = app.documents.clone();
        app.handle_action(before[0].id, "share");
        assert_eq!(app.documents, before);
        assert_eq!(app.status, "share: Quarterly report");
    }

    #[test]
    fn unknown_document_is_ignored() {
        let mut app = app();
        let before = app.documents.clone();
        app.handle_action(Uuid::new_v4(), "delete");
        assert_eq!(app.documents, before);
    }

    #[test]
    fn deleting_through_the_menu() {
        let mut harness = Harness::new_state(|ctx, app: &mut DemoApp| app.ui(ctx), app());
        assert!(harness.query_by_label("Team roadmap").is_some());
        let target = harness.state().documents[1].id;
        let menu_id = harness.state().menu_ids[&target];

        harness
            .query_all_by_label(DOTS_THREE_VERTICAL)
            .nth(1)
            .expect("second document has a menu")
            .click();
        harness.run();

        harness.get_by_label(&format!("{} Delete", TRASH)).click();
        harness.run();

        let deleted = harness.state().documents.len();
        assert_eq!(deleted, 2);
        assert!(harness.query_by_label("Team roadmap").is_none());
        assert!(harness.query_by_label("Quarterly report").is_some());
        assert!(!harness.state().menu_ids.contains_key(&target));
        assert!(harness.ctx.data(|d| d.get_temp::<MenuState>(menu_id)).is_none());
    }
}
