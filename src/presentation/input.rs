use crate::application::{App, AppMode};
use crate::domain::{post_url, share_link, Section, ShareTarget};
use crate::infrastructure::{ClipboardService, CsvExporter};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers, now),
            AppMode::EditField => Self::handle_edit_field_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::ProjectDetail => Self::handle_project_detail_mode(app, key),
            AppMode::ExportCsv => Self::handle_export_mode(app, key, now),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('s') => {
                    if app.current_section() == Section::Contact {
                        app.submit_contact(now);
                    }
                    return;
                }
                KeyCode::Char('e') => {
                    app.start_csv_export();
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                app.sections.next();
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                app.sections.prev();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let slot = c as i64 - '1' as i64;
                if app.current_section() == Section::Testimonials {
                    app.testimonial_index.set_to(slot);
                } else if (slot as usize) < Section::ALL.len() {
                    app.sections.set_to(slot);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => match app.current_section() {
                Section::Work => {
                    app.project_index.next();
                }
                Section::Testimonials => {
                    app.testimonial_index.next();
                }
                Section::Blog => {
                    app.post_index.next();
                }
                Section::Contact => {
                    app.contact_focus.next();
                }
                _ => {}
            },
            KeyCode::Up | KeyCode::Char('k') => match app.current_section() {
                Section::Work => {
                    app.project_index.prev();
                }
                Section::Testimonials => {
                    app.testimonial_index.prev();
                }
                Section::Blog => {
                    app.post_index.prev();
                }
                Section::Contact => {
                    app.contact_focus.prev();
                }
                _ => {}
            },
            KeyCode::Enter => match app.current_section() {
                Section::Work => app.open_project(),
                Section::Contact => app.start_field_editing(),
                _ => {}
            },
            KeyCode::Char('f') => {
                if app.current_section() == Section::Work {
                    app.cycle_filter();
                }
            }
            KeyCode::Char('t') => {
                app.toggle_theme(now);
            }
            KeyCode::Char('c') => {
                if app.current_section() == Section::Blog {
                    Self::share(app, ShareTarget::CopyLink, now);
                }
            }
            KeyCode::Char('x') => {
                if app.current_section() == Section::Blog {
                    Self::share(app, ShareTarget::Twitter, now);
                }
            }
            KeyCode::Char('n') => {
                if app.current_section() == Section::Blog {
                    Self::share(app, ShareTarget::LinkedIn, now);
                }
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn share(app: &mut App, target: ShareTarget, now: Instant) {
        let link = {
            let Some(post) = app.selected_post() else {
                return;
            };
            share_link(target, &post_url(&app.portfolio.site_url, post), &post.title)
        };
        match ClipboardService::copy(&link) {
            Ok(()) => {
                let confirmation = match target {
                    ShareTarget::CopyLink => "Link copied to clipboard!".to_string(),
                    other => format!("{} share link copied!", other.label()),
                };
                app.toast.show(confirmation, now);
            }
            Err(_) => app.toast.show("Failed to copy link", now),
        }
    }

    fn handle_edit_field_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_field_editing();
            }
            KeyCode::Tab => {
                // Save this field and move straight to the next one.
                app.finish_field_editing();
                app.contact_focus.next();
                app.start_field_editing();
            }
            KeyCode::Esc => {
                app.cancel_field_editing();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.input.len() {
                    app.input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.input.len();
            }
            KeyCode::Char(c) => {
                app.input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_project_detail_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                app.close_project();
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
                app.project_index.next();
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
                app.project_index.prev();
            }
            _ => {}
        }
    }

    fn handle_export_mode(app: &mut App, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Enter => {
                let filename = app.get_csv_export_filename();
                let result = CsvExporter::export_projects(&app.portfolio.projects, &filename);
                app.set_csv_export_result(result, now);
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.filename_input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.filename_input.len() {
                    app.filename_input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.filename_input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filename_input.len();
            }
            KeyCode::Char(c) => {
                app.filename_input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }
}
