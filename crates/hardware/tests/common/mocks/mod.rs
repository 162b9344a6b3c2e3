//! Mock implementations for isolating units under test.
