mod source_tests;
mod affine_tests;
