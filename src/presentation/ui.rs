use crate::application::{App, AppMode};
use crate::domain::{Section, SubmissionPhase, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

struct Palette {
    bg: Color,
    fg: Color,
    accent: Color,
    muted: Color,
    highlight_bg: Color,
    highlight_fg: Color,
    success: Color,
    error: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::DarkGray,
            highlight_bg: Color::LightBlue,
            highlight_fg: Color::Black,
            success: Color::Green,
            error: Color::Red,
        },
        Theme::Dark => Palette {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            muted: Color::Gray,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            success: Color::LightGreen,
            error: Color::LightRed,
        },
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let colors = palette(app.theme.current());
    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.fg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_hero(f, app, &colors, chunks[0]);
    render_nav(f, app, &colors, chunks[1]);
    render_section(f, app, &colors, chunks[2]);
    render_status_bar(f, app, &colors, chunks[3]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll, &colors);
    }
    if matches!(app.mode, AppMode::ProjectDetail) {
        render_project_popup(f, app, &colors);
    }
}

fn render_hero(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} - {}", app.portfolio.owner, app.portfolio.tagline),
            Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("I am a ", Style::default().fg(colors.muted)),
            Span::styled(
                format!("{}▌", app.typewriter.visible()),
                Style::default().fg(colors.accent),
            ),
        ]),
    ]);
    f.render_widget(hero, area);
}

fn render_nav(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|s| Line::from(s.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.sections.current().unwrap_or(0))
        .style(Style::default().fg(colors.muted))
        .highlight_style(
            Style::default()
                .fg(colors.highlight_fg)
                .bg(colors.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_section(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    match app.current_section() {
        Section::Home => render_home(f, app, colors, area),
        Section::About => render_about(f, app, colors, area),
        Section::Work => render_work(f, app, colors, area),
        Section::Testimonials => render_testimonials(f, app, colors, area),
        Section::Blog => render_blog(f, app, colors, area),
        Section::Contact => render_contact(f, app, colors, area),
    }
}

fn render_home(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome. This is the terminal edition of {}'s portfolio.", app.portfolio.owner),
            Style::default().fg(colors.fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Tab through the sections above, or jump with the number keys.",
            Style::default().fg(colors.muted),
        )),
        Line::from(Span::styled(
            "Press t to switch between light and dark, ? for all shortcuts.",
            Style::default().fg(colors.muted),
        )),
    ];
    let home = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Home"))
        .wrap(Wrap { trim: true });
    f.render_widget(home, area);
}

fn render_about(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut lines = vec![Line::from("")];
    for paragraph in &app.portfolio.about {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(colors.fg),
        )));
        lines.push(Line::from(""));
    }
    let about = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("About"))
        .wrap(Wrap { trim: true });
    f.render_widget(about, area);
}

fn render_work(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        format!("Filter: {} (f to cycle)", app.filter_label()),
        Style::default().fg(colors.muted),
    ))];

    for (position, &index) in app.visible_projects.iter().enumerate() {
        let project = &app.portfolio.projects[index];
        let selected = app.project_index.is_active(position);
        let style = if selected {
            Style::default().fg(colors.highlight_fg).bg(colors.highlight_bg)
        } else {
            Style::default().fg(colors.fg)
        };
        let marker = if selected { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}", marker, project.title), style),
            Span::styled(
                format!("  [{}] {}", project.category.label(), project.meta),
                Style::default().fg(colors.muted),
            ),
        ]));
    }

    if app.visible_projects.is_empty() {
        lines.push(Line::from(Span::styled(
            "No projects in this category.",
            Style::default().fg(colors.muted),
        )));
    }

    let work = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Work - Enter for details"));
    f.render_widget(work, area);
}

fn render_testimonials(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut lines = vec![Line::from("")];

    if let Some(index) = app.testimonial_index.current() {
        let testimonial = &app.portfolio.testimonials[index];
        lines.push(Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", testimonial.quote),
            Style::default().fg(colors.fg),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("- {}, {}", testimonial.author, testimonial.role),
            Style::default().fg(colors.accent),
        )));
        lines.push(Line::from(""));

        let dots: Vec<Span> = (0..app.testimonial_index.count())
            .map(|i| {
                if app.testimonial_index.is_active(i) {
                    Span::styled("● ", Style::default().fg(colors.accent))
                } else {
                    Span::styled("○ ", Style::default().fg(colors.muted))
                }
            })
            .collect();
        lines.push(Line::from(dots));
    } else {
        lines.push(Line::from(Span::styled(
            "No testimonials yet.",
            Style::default().fg(colors.muted),
        )));
    }

    let testimonials = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Testimonials - ↑/↓ to browse"))
        .wrap(Wrap { trim: true });
    f.render_widget(testimonials, area);
}

fn render_blog(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let mut lines = Vec::new();
    for (i, post) in app.portfolio.posts.iter().enumerate() {
        let selected = app.post_index.is_active(i);
        let style = if selected {
            Style::default().fg(colors.highlight_fg).bg(colors.highlight_bg)
        } else {
            Style::default().fg(colors.fg)
        };
        let marker = if selected { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}  ({})", marker, post.title, post.date),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", post.summary),
            Style::default().fg(colors.muted),
        )));
        lines.push(Line::from(""));
    }

    if app.portfolio.posts.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing published yet.",
            Style::default().fg(colors.muted),
        )));
    }

    let blog = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Blog - c: copy link, x: Twitter, n: LinkedIn"))
        .wrap(Wrap { trim: true });
    f.render_widget(blog, area);
}

fn render_contact(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let labels = ["Name", "Email", "Subject", "Message"];
    let mut lines = vec![Line::from("")];

    for (i, label) in labels.iter().enumerate() {
        let focused = app.contact_focus.is_active(i);
        let editing = focused && matches!(app.mode, AppMode::EditField);
        let value = if editing {
            format!("{}▌", app.input)
        } else {
            app.contact.form.field(i).to_string()
        };
        let label_style = if focused {
            Style::default().fg(colors.highlight_fg).bg(colors.highlight_bg)
        } else {
            Style::default().fg(colors.muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<8}", label), label_style),
            Span::raw(" "),
            Span::styled(value, Style::default().fg(colors.fg)),
        ]));
    }

    lines.push(Line::from(""));
    match app.contact.phase() {
        SubmissionPhase::Pending => {
            lines.push(Line::from(Span::styled(
                "Sending...",
                Style::default().fg(colors.accent),
            )));
        }
        _ => {
            if let Some(note) = app.contact.note() {
                let color = if note.is_error { colors.error } else { colors.success };
                lines.push(Line::from(Span::styled(
                    note.text.clone(),
                    Style::default().fg(color),
                )));
            }
        }
    }

    let contact = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Contact - Enter: edit field, Ctrl+S: send"))
        .wrap(Wrap { trim: true });
    f.render_widget(contact, area);
}

fn render_status_bar(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal | AppMode::ProjectDetail => {
            if let Some(toast) = app.toast.message() {
                toast.to_string()
            } else if matches!(app.mode, AppMode::ProjectDetail) {
                "←/→: previous/next project | Esc: close".to_string()
            } else {
                "Tab: sections | ↑↓: browse | t: theme | Ctrl+E: export CSV | F1/?: help | q: quit"
                    .to_string()
            }
        }
        AppMode::EditField => format!("Editing: {} (Enter to save, Esc to cancel)", app.input),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::ExportCsv => format!(
            "Export CSV as: {} (Enter to export, Esc to cancel)",
            app.filename_input
        ),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal | AppMode::ProjectDetail => Style::default().fg(colors.fg),
            AppMode::EditField => Style::default().fg(colors.success),
            AppMode::Help => Style::default().fg(colors.accent),
            AppMode::ExportCsv => Style::default().fg(colors.accent),
        });
    f.render_widget(status, area);
}

fn render_project_popup(f: &mut Frame, app: &App, colors: &Palette) {
    let Some(project) = app.selected_project() else {
        return;
    };

    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("[{}] {}", project.category.label(), project.meta),
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(project.description.clone(), Style::default().fg(colors.fg))),
        Line::from(""),
        Line::from(Span::styled("Challenge", Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(project.challenge.clone(), Style::default().fg(colors.fg))),
        Line::from(""),
        Line::from(Span::styled("Solution", Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(project.solution.clone(), Style::default().fg(colors.fg))),
        Line::from(""),
        Line::from(Span::styled("Results", Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))),
    ];
    for result in &project.results {
        lines.push(Line::from(Span::styled(
            format!("  • {}", result),
            Style::default().fg(colors.fg),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Stack: {}", project.stack.join(" · ")),
        Style::default().fg(colors.muted),
    )));

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(project.title.clone())
                .style(Style::default().bg(colors.bg).fg(colors.fg)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(popup, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize, colors: &Palette) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("folio Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().bg(colors.bg).fg(colors.accent)),
        )
        .style(Style::default().fg(colors.fg));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"FOLIO KEY REFERENCE

=== SECTIONS ===
Tab / Shift+Tab Next / previous section
Left / Right    Next / previous section (also h/l)
1-6             Jump straight to a section
q               Quit (from normal browsing)

=== WITHIN A SECTION ===
Up / Down       Move through projects, testimonials, posts,
                or contact fields (also j/k)
Enter           Open the selected project, or edit the
                focused contact field

=== WORK ===
f               Cycle the category filter (All / Design /
                Web / Branding)
Enter           Open project details
Left / Right    Previous / next project while details are open
Esc             Close project details

=== TESTIMONIALS ===
Up / Down       Previous / next testimonial
1-9             Jump to a testimonial dot

=== BLOG ===
c               Copy the selected post's link
x               Copy a Twitter share link
n               Copy a LinkedIn share link

=== CONTACT ===
Enter           Edit the focused field
Tab             Save the field and edit the next one
Ctrl+S          Send the message
Esc             Cancel the current edit

The form checks required fields, the email address shape, and a
10 character minimum for the message before anything is sent.
You will see the outcome next to the form; it clears by itself.

=== EVERYWHERE ===
t               Toggle light / dark theme (saved for next time)
Ctrl+E          Export the project list to a CSV file
F1 or ?         Show this help
Esc / q         Close this help window

Theme and content live next to the binary: folio_prefs.json and
folio.json. Delete folio_prefs.json to go back to the default
light theme."#
        .to_string()
}
