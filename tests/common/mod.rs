#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the rbac-audit binary.
#[macro_export]
macro_rules! rbac_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("rbac-audit"))
    };
}

pub const COMPLIANT_CONTROLLER: &str = "\
import { requirePageAccess } from '../middleware/pageAccess.js';

router.get('/', requirePageAccess('users'), listUsers);
";

pub const LEGACY_ROUTES: &str = "\
router.post('/', requireRole('hr'), createEmployee);
";

pub const LEGACY_FEATURE_PAGE: &str = "\
const EmployeeList = () => <div />;
export default withRoleCheck(EmployeeList, ['admin']);
";

/// Manifest covering a compliant controller, a legacy route and a missing file.
pub const SAMPLE_MANIFEST: &str = "\
1→backend/controllers/userController.js
2→backend/routes/hr.js
3→backend/controllers/goneController.js
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".rbac-audit.toml", content);
    }

    /// Lays out the sources referenced by `SAMPLE_MANIFEST` plus the manifest itself.
    pub fn create_sample_project(&self) {
        self.create_file("backend/controllers/userController.js", COMPLIANT_CONTROLLER);
        self.create_file("backend/routes/hr.js", LEGACY_ROUTES);
        self.create_file("files.txt", SAMPLE_MANIFEST);
    }
}
