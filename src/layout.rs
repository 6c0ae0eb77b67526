use crate::{
    DataSource, Dataset, Error, FilterBar, MoveRecord, MovesViewError, MovesViewResult, MyStyle,
    Notification, ViewAction, ViewController, ViewState, ViewSummary, open_file, render_table,
    save_view_as,
};

use egui::{
    CentralPanel, Color32, Context, Direction, FontId, Frame, Grid, Hyperlink, Layout, MenuBar,
    RichText, ScrollArea, SidePanel, Stroke, TopBottomPanel, ViewportCommand, style::Visuals,
    warn_if_debug_build, widgets,
};
use std::{path::Path, sync::Arc};
use tokio::sync::oneshot::{self, Receiver, error::TryRecvError};
use tracing::error;

/// Type alias for a Result with a loaded `Dataset`.
pub type DatasetResult = MovesViewResult<Dataset>;
/// Type alias for a boxed, dynamically dispatched Future that returns a `DatasetResult`.
pub type DataFuture = Box<dyn Future<Output = DatasetResult> + Unpin + Send + 'static>;

/// The main application struct for Moves View.
pub struct MovesViewApp {
    /// The loaded moves and the current view over them.
    pub controller: Option<ViewController>,
    /// Where the next load reads from (path, delimiter).
    pub data_source: DataSource,
    /// Search box and dropdowns above the table.
    pub filter_bar: FilterBar,
    /// Counts over the displayed rows, rebuilt when the view changes.
    pub summary: Option<ViewSummary>,
    /// Optional Notification window for displaying errors.
    pub notification: Option<Box<dyn Notification>>,

    /// State applied to the next dataset that finishes loading.
    initial_state: ViewState,
    /// Controller revision the `summary` was computed for.
    summary_revision: Option<u64>,
    /// Tokio runtime for asynchronous operations (file loading, export).
    runtime: tokio::runtime::Runtime,
    /// Channel for receiving the result of asynchronous data loading.
    pipe: Option<Receiver<DatasetResult>>,
    /// Channel for receiving the result of the running export, if any.
    export_pipe: Option<Receiver<MovesViewResult<()>>>,
    /// Vector of active asynchronous tasks.
    tasks: Vec<tokio::task::JoinHandle<()>>,
}

impl MovesViewApp {
    /// Creates a new `MovesViewApp` with no data loaded.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_state: ViewState,
    ) -> MovesViewResult<Self> {
        cc.egui_ctx.set_style_init(Visuals::dark());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            controller: None,
            data_source: DataSource::default(),
            filter_bar: FilterBar::new(&initial_state),
            summary: None,
            notification: None,
            initial_state,
            summary_revision: None,
            runtime,
            pipe: None,
            export_pipe: None,
            tasks: Vec::new(),
        })
    }

    /// Creates a new `MovesViewApp` that starts loading `data_source` right away.
    pub fn new_with_future(
        cc: &eframe::CreationContext<'_>,
        data_source: DataSource,
        initial_state: ViewState,
    ) -> MovesViewResult<Self> {
        let mut app = Self::new(cc, initial_state)?;
        app.data_source = data_source.clone();
        let future = data_source.load();
        app.run_data_future(Box::new(Box::pin(future)), &cc.egui_ctx);
        Ok(app)
    }

    /// Checks if a Notification is active and displays it.
    fn check_notification(&mut self, ctx: &Context) {
        if let Some(notification) = &mut self.notification
            && !notification.show(ctx)
        {
            self.notification = None;
        }
    }

    /// Shows `err` in the error window and logs it.
    fn notify_error(&mut self, context: &str, err: &MovesViewError) {
        error!("{context}: {err}");
        self.notification = Some(Box::new(Error {
            message: err.to_string(),
        }));
    }

    /// Checks if there is a pending data loading operation.
    ///
    /// Returns `true` while loading is in progress, `false` once it finished
    /// (with data or with an error) or if nothing was pending.
    fn check_data_pending(&mut self) -> bool {
        let Some(mut output) = self.pipe.take() else {
            return false;
        };

        match output.try_recv() {
            Ok(Ok(dataset)) => {
                // Keep the filters and sort of the previous view, if any.
                let state = self
                    .controller
                    .as_ref()
                    .map_or_else(|| self.initial_state.clone(), |c| c.state().clone());

                self.data_source = dataset.source.as_ref().clone();
                self.controller = Some(ViewController::new(Arc::new(dataset), state));
                self.summary_revision = None;
                false
            }
            Ok(Err(err)) => {
                // The previous dataset, if any, stays displayed.
                self.notify_error("Data loading failed", &err);
                false
            }
            Err(TryRecvError::Empty) => {
                self.pipe = Some(output);
                true
            }
            Err(TryRecvError::Closed) => {
                let err = MovesViewError::ChannelReceive(
                    "Data operation terminated without response.".to_string(),
                );
                self.notify_error("Data loading failed", &err);
                false
            }
        }
    }

    /// Runs a `DataFuture` on the Tokio runtime, delivering the result through `pipe`.
    fn run_data_future(&mut self, future: DataFuture, ctx: &Context) {
        self.tasks.retain(|task| !task.is_finished());

        let (tx, rx) = oneshot::channel::<DatasetResult>();
        self.pipe = Some(rx);

        let ctx_clone = ctx.clone();

        let handle = self.runtime.spawn(async move {
            let data = future.await;
            if tx.send(data).is_err() {
                error!("Receiver dropped before data could be sent.");
            }

            ctx_clone.request_repaint();
        });

        self.tasks.push(handle);
    }

    /// Points the data source at `path` and starts loading it.
    fn load_path(&mut self, path: &Path, ctx: &Context) {
        match self.data_source.set_path(path) {
            Ok(()) => {
                let future = self.data_source.clone().load();
                self.run_data_future(Box::new(Box::pin(future)), ctx);
            }
            Err(err) => self.notify_error("Cannot open file", &err),
        }
    }

    /// Exports the displayed rows through a save dialog, off the UI thread.
    fn export_view(&mut self, ctx: &Context) {
        let Some(controller) = &self.controller else {
            return;
        };

        let records: Vec<MoveRecord> = controller.rows().cloned().collect();
        let ctx_clone = ctx.clone();

        let (tx, rx) = oneshot::channel::<MovesViewResult<()>>();
        self.export_pipe = Some(rx);

        let handle = self.runtime.spawn(async move {
            let result = save_view_as(records, ctx_clone.clone()).await;
            if tx.send(result).is_err() {
                error!("Receiver dropped before the export result could be sent.");
            }
            ctx_clone.request_repaint();
        });
        self.tasks.push(handle);
    }

    /// Shows the outcome of a finished export, if it failed.
    fn check_export_pending(&mut self) {
        let Some(mut output) = self.export_pipe.take() else {
            return;
        };

        match output.try_recv() {
            Ok(Ok(())) => {}
            Ok(Err(err)) => self.notify_error("Failed to export view", &err),
            Err(TryRecvError::Empty) => self.export_pipe = Some(output),
            Err(TryRecvError::Closed) => {
                let err = MovesViewError::ChannelReceive(
                    "Export terminated without response.".to_string(),
                );
                self.notify_error("Failed to export view", &err);
            }
        }
    }

    /// Applies a view change to the controller, or to the initial state while
    /// nothing is loaded.
    fn dispatch(&mut self, action: ViewAction) {
        match &mut self.controller {
            Some(controller) => controller.dispatch(action),
            // No data yet: the change applies to the first dataset loaded.
            None => self.initial_state = self.initial_state.apply(action),
        }
    }

    /// Recomputes the summary if the view changed since the last frame.
    fn refresh_summary(&mut self) {
        let Some(controller) = &self.controller else {
            self.summary = None;
            return;
        };

        if self.summary_revision != Some(controller.revision()) || self.summary.is_none() {
            self.summary = Some(ViewSummary::from_rows(
                controller.rows(),
                controller.dataset().len(),
            ));
            self.summary_revision = Some(controller.revision());
        }
    }

    fn current_state(&self) -> &ViewState {
        self.controller
            .as_ref()
            .map_or(&self.initial_state, |c| c.state())
    }

    fn render_menu(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open").clicked() {
                    if let Ok(path) = self.runtime.block_on(open_file()) {
                        self.load_path(&path, ctx);
                    }
                    ui.close();
                }

                let has_rows = self.controller.is_some();
                if ui
                    .add_enabled(has_rows, egui::Button::new("Export view…"))
                    .clicked()
                {
                    self.export_view(ctx);
                    ui.close();
                }

                ui.menu_button("About", render_about);

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(ViewportCommand::Close);
                }
            });

            // Add spacing to align theme switch to the right.
            let delta = ui.available_width() - 15.0;
            if delta > 0.0 {
                ui.add_space(delta);
                widgets::global_theme_preference_switch(ui);
            }
        });
    }
}

/// Application information shown under File ▸ About.
fn render_about(ui: &mut egui::Ui) {
    Frame::default()
        .stroke(Stroke::new(1.0, Color32::GRAY))
        .outer_margin(2.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            let version = env!("CARGO_PKG_VERSION");
            let description = env!("CARGO_PKG_DESCRIPTION");

            Grid::new("about_grid")
                .num_columns(1)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    ui.with_layout(Layout::centered_and_justified(Direction::LeftToRight), |ui| {
                        ui.label(RichText::new("Moves View").font(FontId::proportional(30.0)));
                    });
                    ui.end_row();

                    ui.with_layout(Layout::centered_and_justified(Direction::LeftToRight), |ui| {
                        ui.label(format!("Version: {version}"));
                    });
                    ui.end_row();
                    ui.end_row();

                    ui.with_layout(Layout::centered_and_justified(Direction::LeftToRight), |ui| {
                        ui.label(RichText::new(description).font(FontId::proportional(20.0)));
                    });
                    ui.end_row();
                    ui.end_row();

                    ui.horizontal(|ui| {
                        let url = "https://github.com/pola-rs/polars";
                        let heading = Hyperlink::from_label_and_url("Polars", url);

                        ui.label("Powered by ");
                        ui.add(heading).on_hover_text(url);
                    });
                    ui.end_row();

                    ui.horizontal(|ui| {
                        let url = "https://github.com/emilk/egui";
                        let heading = Hyperlink::from_label_and_url("egui", url);

                        ui.label("Built with ");
                        ui.add(heading).on_hover_text(url);
                    });
                    ui.end_row();
                });
        });
}

impl eframe::App for MovesViewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.check_notification(ctx);

        // Handle dropped files.
        if let Some(dropped_file) = ctx.input(|i| i.raw.dropped_files.last().cloned())
            && let Some(path) = &dropped_file.path
        {
            self.load_path(path, ctx);
        }

        let data_pending = self.check_data_pending();
        self.check_export_pending();
        self.refresh_summary();

        //  | menu_bar                    |
        //  | heading + filter bar        |
        //  -------------------------------
        //  |         |                   |
        //  | Summary |   moves table     |
        //  |         |                   |
        //  -------------------------------
        //  | path             | n of m   |

        let mut pending_action: Option<ViewAction> = None;

        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_menu(ui, ctx);

            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.heading("Pokemon Move List");
            });
            ui.add_space(4.0);

            let state = self.current_state().clone();
            ui.add_enabled_ui(!data_pending, |ui| {
                pending_action = self.filter_bar.render(&state, ui);
            });
            ui.add_space(4.0);
        });

        SidePanel::left("side_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Summary");
                    match &self.summary {
                        Some(summary) => summary.render_summary(ui),
                        None => {
                            ui.label("no moves loaded");
                        }
                    }
                });
            });

        TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| match &self.controller {
                Some(controller) => {
                    ui.label(format!("{}", controller.dataset().source.absolute_path.display()));
                    ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "Showing {} of {} moves",
                            controller.rows().len(),
                            controller.dataset().len()
                        ));
                    });
                }
                None => {
                    ui.label("no file set");
                }
            });
        });

        // CentralPanel must be added after all other panels.
        CentralPanel::default().show(ctx, |ui| {
            warn_if_debug_build(ui);

            if data_pending {
                ui.disable();
            }

            match &self.controller {
                Some(controller) => {
                    ScrollArea::horizontal()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            if let Some(action) = render_table(controller, ui) {
                                pending_action = Some(action);
                            }
                        });
                }
                None if data_pending => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Drag and drop a moves CSV file here, or use File ▸ Open.");
                    });
                }
            }
        });

        // Apply after the panels so the controller is not borrowed while rendering.
        if let Some(action) = pending_action {
            let actions = self
                .filter_bar
                .with_pending_search(self.current_state(), action);
            for action in actions {
                self.dispatch(action);
            }
            ctx.request_repaint();
        }
    }
}
