//! the fixed file templates and the placeholder substitution

/// the literal token replaced with the project name in the cmake template
pub const PLACEHOLDER: &str = "REPLACE_ME_WITH_PROJECT_NAME";

// the placeholder must appear exactly once in here
pub const CMAKE_LISTS_TEMPLATE: &str = r#"
# Set the minimum required CMake version
cmake_minimum_required(VERSION 3.1.0)

# Set the minimum required C++ version
set(CMAKE_CXX_STANDARD 17)
set(CMAKE_CXX_STANDARD_REQUIRED ON)

# Define project name
project(REPLACE_ME_WITH_PROJECT_NAME)

# Find the gtkmm package
find_package(PkgConfig)
pkg_check_modules(GTKMM gtkmm-3.0)

# Add source files
file(GLOB SOURCES "${PROJECT_SOURCE_DIR}/src/*.cpp")

# Include gtkmm directories
include_directories(${GTKMM_INCLUDE_DIRS})

# Include headers in the include/ directory
include_directories(${PROJECT_SOURCE_DIR}/include)

# Create an executable from main.cpp
add_executable(${CMAKE_PROJECT_NAME} src/main.cpp)

# Link against gtkmm libraries
target_link_libraries(${CMAKE_PROJECT_NAME} ${GTKMM_LIBRARIES})
"#;

// never templated, written out verbatim
pub const MAIN_CPP: &str = r#"
#include <gtkmm.h>

int main(int argc, char *argv[])
{
  Gtk::Main kit(argc, argv);

  Gtk::Window window;

  Gtk::Main::run(window);

  return EXIT_SUCCESS;
}
"#;

// replace only the first occurrence, if the token is not there at all just
// hand the template back unchanged instead of failing
fn render(template: &str, name: &str) -> String {
    template.replacen(PLACEHOLDER, name, 1)
}

/// the CMakeLists.txt content with the project name filled in
pub fn render_cmake_lists(name: &str) -> String {
    render(CMAKE_LISTS_TEMPLATE, name)
}
