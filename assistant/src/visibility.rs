//! Dashboard panel visibility reducer.
//!
//! DESIGN
//! ======
//! Panel flags are monotonic for the lifetime of a session: a matched
//! rule can reveal a panel but nothing ever hides one again. The active
//! tab always tracks the most recently requested tab. Requesting the 3D
//! view only switches the tab; it does not persist a flag.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Symbolic UI action attached to a matched rule or classifier category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ProjectSetup,
    TeamSetup,
    ToolsComparison,
    FileManagement,
    VersionControl,
    ProgressGraphs,
    ImportExport,
    View3d,
}

/// Tabs available in the main dashboard panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Project,
    Team,
    Tools,
    Files,
    Versions,
    Graphs,
    ImportExport,
    View3d,
}

/// Which dashboard panels have been revealed, plus the active tab.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityState {
    pub project_setup: bool,
    pub team_setup: bool,
    pub tools_comparison: bool,
    pub file_management: bool,
    pub version_control: bool,
    pub progress_graphs: bool,
    pub import_export: bool,
    pub active_tab: Tab,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            project_setup: true,
            team_setup: false,
            tools_comparison: false,
            file_management: false,
            version_control: false,
            progress_graphs: false,
            import_export: false,
            active_tab: Tab::Project,
        }
    }
}

impl VisibilityState {
    /// Apply a UI action from a resolved response. `None` leaves the
    /// state untouched.
    ///
    /// Every branch except the 3D view also forces the base project
    /// panel on: once any richer panel is requested, the dashboard
    /// baseline is implicitly enabled.
    pub fn apply(&mut self, action: Option<UiAction>) {
        let Some(action) = action else { return };
        match action {
            UiAction::ProjectSetup => {
                self.project_setup = true;
                self.active_tab = Tab::Project;
            }
            UiAction::TeamSetup => {
                self.project_setup = true;
                self.team_setup = true;
                self.active_tab = Tab::Team;
            }
            UiAction::ToolsComparison => {
                self.project_setup = true;
                self.tools_comparison = true;
                self.active_tab = Tab::Tools;
            }
            UiAction::FileManagement => {
                self.project_setup = true;
                self.file_management = true;
                self.active_tab = Tab::Files;
            }
            UiAction::VersionControl => {
                self.project_setup = true;
                self.version_control = true;
                self.active_tab = Tab::Versions;
            }
            UiAction::ProgressGraphs => {
                self.project_setup = true;
                self.progress_graphs = true;
                self.active_tab = Tab::Graphs;
            }
            UiAction::ImportExport => {
                self.project_setup = true;
                self.import_export = true;
                self.active_tab = Tab::ImportExport;
            }
            UiAction::View3d => {
                self.active_tab = Tab::View3d;
            }
        }
    }

    /// Select a tab from the sidebar, revealing its panel flag.
    ///
    /// Mirrors `apply` except the 3D view, which stays flagless.
    pub fn open_tab(&mut self, tab: Tab) {
        match tab {
            Tab::Project => self.project_setup = true,
            Tab::Team => self.team_setup = true,
            Tab::Tools => self.tools_comparison = true,
            Tab::Files => self.file_management = true,
            Tab::Versions => self.version_control = true,
            Tab::Graphs => self.progress_graphs = true,
            Tab::ImportExport => self.import_export = true,
            Tab::View3d => {}
        }
        self.active_tab = tab;
    }

    /// Whether the panel behind `tab` has been revealed.
    #[must_use]
    pub fn is_open(&self, tab: Tab) -> bool {
        match tab {
            Tab::Project => self.project_setup,
            Tab::Team => self.team_setup,
            Tab::Tools => self.tools_comparison,
            Tab::Files => self.file_management,
            Tab::Versions => self.version_control,
            Tab::Graphs => self.progress_graphs,
            Tab::ImportExport => self.import_export,
            Tab::View3d => true,
        }
    }
}
